//! Store catalog endpoints (barbers, services)

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{error::AppResult, models::catalog::BarberShort};

/// Service offered by the store
#[derive(Serialize, ToSchema)]
pub struct ServiceSummary {
    pub id: Uuid,
    pub name: String,
    pub price: f32,
}

/// List the bookable barbers of this store
#[utoipa::path(
    get,
    path = "/barbers",
    tag = "catalog",
    responses(
        (status = 200, description = "Staff members of the store", body = Vec<BarberShort>)
    )
)]
pub async fn list_barbers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BarberShort>>> {
    let barbers = state.services.catalog.list_barbers().await?;
    Ok(Json(barbers))
}

/// List the services offered by this store
#[utoipa::path(
    get,
    path = "/services",
    tag = "catalog",
    responses(
        (status = 200, description = "Service catalog of the store", body = Vec<ServiceSummary>)
    )
)]
pub async fn list_services(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ServiceSummary>>> {
    let services = state.services.catalog.list_services().await?;

    Ok(Json(
        services
            .into_iter()
            .map(|s| ServiceSummary {
                id: s.id,
                name: s.service_name,
                price: s.service_price,
            })
            .collect(),
    ))
}
