//! Availability endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;

/// Query parameters for a point availability check
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    /// Barber account id
    pub barber_id: String,
    /// Day, `YYYY-MM-DD`
    pub date: String,
    /// Slot time, `HH:MM`
    pub time: String,
}

/// Availability check result
#[derive(Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub available: bool,
}

/// Query parameters for a day slot listing
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SlotsQuery {
    /// Barber account id
    pub barber_id: String,
    /// Day, `YYYY-MM-DD`
    pub date: String,
}

/// Free slots of a barber's day
#[derive(Serialize, ToSchema)]
pub struct SlotsResponse {
    /// Slot start times in grid order, `HH:MM`
    pub slots: Vec<String>,
}

/// Check whether a barber is free at a given date and time
#[utoipa::path(
    get,
    path = "/availability",
    tag = "availability",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Availability for the slot", body = AvailabilityResponse),
        (status = 400, description = "Malformed barber id, date or time"),
        (status = 404, description = "Barber not found in this store")
    )
)]
pub async fn check_availability(
    State(state): State<crate::AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    let available = state
        .services
        .availability
        .check_availability(&query.barber_id, &query.date, &query.time)
        .await?;

    Ok(Json(AvailabilityResponse { available }))
}

/// List a barber's free slots for a day
#[utoipa::path(
    get,
    path = "/slots",
    tag = "availability",
    params(SlotsQuery),
    responses(
        (status = 200, description = "Free slots in grid order", body = SlotsResponse),
        (status = 400, description = "Malformed barber id or date"),
        (status = 404, description = "Barber not found in this store")
    )
)]
pub async fn list_available_slots(
    State(state): State<crate::AppState>,
    Query(query): Query<SlotsQuery>,
) -> AppResult<Json<SlotsResponse>> {
    let slots = state
        .services
        .availability
        .list_available_slots(&query.barber_id, &query.date)
        .await?;

    Ok(Json(SlotsResponse {
        slots: slots.iter().map(|s| s.format("%H:%M").to_string()).collect(),
    }))
}
