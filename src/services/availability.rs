//! Availability service: point checks and day slot listing
//!
//! Read-only; never mutates appointment state.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::membership::StoreMembership,
    repository::Repository,
    services::slots,
};

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
    store_id: Uuid,
}

impl AvailabilityService {
    pub fn new(repository: Repository, store_id: Uuid) -> Self {
        Self {
            repository,
            store_id,
        }
    }

    /// Is the barber free at the given date and time?
    pub async fn check_availability(
        &self,
        barber_id: &str,
        date: &str,
        time: &str,
    ) -> AppResult<bool> {
        let membership = self.resolve_barber(barber_id).await?;
        let starts_at = slots::parse_slot(date, time)?;

        let occupied = self
            .repository
            .appointments
            .is_occupied(membership.id, starts_at)
            .await?;

        Ok(!occupied)
    }

    /// List the free slots of the barber's day, in grid order.
    ///
    /// One range query covers the whole day instead of a point query per grid
    /// entry; a slot is free exactly when its timestamp is absent from the
    /// occupied set.
    pub async fn list_available_slots(
        &self,
        barber_id: &str,
        date: &str,
    ) -> AppResult<Vec<NaiveDateTime>> {
        let membership = self.resolve_barber(barber_id).await?;
        let day = slots::parse_date(date)?;

        let occupied = self
            .repository
            .appointments
            .occupied_times_for_day(membership.id, day)
            .await?;

        let available = slots::day_grid(day)
            .into_iter()
            .filter(|slot| !occupied.contains(slot))
            .collect();

        Ok(available)
    }

    /// Resolve a barber id string to the staff membership in this store
    async fn resolve_barber(&self, barber_id: &str) -> AppResult<StoreMembership> {
        let barber_id = Uuid::parse_str(barber_id)
            .map_err(|_| AppError::Validation("Invalid barber ID format".to_string()))?;

        self.repository
            .memberships
            .find_staff(barber_id, self.store_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Barber not found".to_string()))
    }
}
