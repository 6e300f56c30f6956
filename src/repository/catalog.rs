//! Store service catalog repository (read-only reference data)

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{error::AppResult, models::catalog::StoreService};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: Pool<Postgres>,
}

impl CatalogRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List the active services offered by a store
    pub async fn list_services(&self, store_id: Uuid) -> AppResult<Vec<StoreService>> {
        let services = sqlx::query_as::<_, StoreService>(
            r#"
            SELECT id, store_id, service_name, service_price, is_active
            FROM store_services
            WHERE store_id = $1 AND is_active
            ORDER BY service_name
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }
}
