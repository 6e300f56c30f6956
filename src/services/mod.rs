//! Business logic services

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod slots;

use std::time::Duration;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub availability: availability::AvailabilityService,
    pub booking: booking::BookingService,
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        let store_id = config.store.id;
        let booking_timeout = Duration::from_secs(config.database.booking_timeout_secs);

        Self {
            availability: availability::AvailabilityService::new(repository.clone(), store_id),
            booking: booking::BookingService::new(repository.clone(), store_id, booking_timeout),
            catalog: catalog::CatalogService::new(repository, store_id),
        }
    }
}
