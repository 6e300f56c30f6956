//! Appointment booking endpoint

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppResult;

/// Book appointment request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    /// Customer account id
    pub user_id: String,
    /// Barber account id
    pub barber_id: String,
    /// Day, `YYYY-MM-DD`
    pub date: String,
    /// Slot time, `HH:MM`
    pub time: String,
}

/// Booking confirmation
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    /// Identifier of the scheduled appointment
    pub appointment_id: Uuid,
}

/// Book an appointment slot
#[utoipa::path(
    post,
    path = "/appointment",
    tag = "appointments",
    request_body = BookAppointmentRequest,
    responses(
        (status = 201, description = "Appointment scheduled", body = BookingResponse),
        (status = 400, description = "Malformed id, date or time, or off-grid slot"),
        (status = 404, description = "User or barber not found"),
        (status = 409, description = "Slot already taken")
    )
)]
pub async fn book_appointment(
    State(state): State<crate::AppState>,
    Json(request): Json<BookAppointmentRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    let appointment = state
        .services
        .booking
        .book_appointment(&request.user_id, &request.barber_id, &request.date, &request.time)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            success: true,
            appointment_id: appointment.id,
        }),
    ))
}
