//! Store catalog service (staff listing, offered services)

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::catalog::{BarberShort, StoreService},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    store_id: Uuid,
}

impl CatalogService {
    pub fn new(repository: Repository, store_id: Uuid) -> Self {
        Self {
            repository,
            store_id,
        }
    }

    /// List the bookable barbers of this store
    pub async fn list_barbers(&self) -> AppResult<Vec<BarberShort>> {
        self.repository.memberships.list_staff(self.store_id).await
    }

    /// List the services offered by this store
    pub async fn list_services(&self) -> AppResult<Vec<StoreService>> {
        self.repository.catalog.list_services(self.store_id).await
    }
}
