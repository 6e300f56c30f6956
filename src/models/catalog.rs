//! Read-only store reference data (staff listing, service catalog)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Bookable barber, as exposed by the staff listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BarberShort {
    /// The person's account id, usable as `barberId` in booking calls
    pub id: Uuid,
    pub name: String,
}

/// Service offered by a store
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoreService {
    pub id: Uuid,
    pub store_id: Uuid,
    pub service_name: String,
    pub service_price: f32,
    pub is_active: bool,
}
