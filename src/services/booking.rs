//! Booking service: validated, deadline-bounded slot reservation
//!
//! All writes to the appointment table go through here. The availability
//! check and the insert are never exposed as separately callable steps; the
//! repository runs them as one transaction (see
//! [`crate::repository::appointments`]).

use std::time::Duration;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::appointment::{Appointment, NewAppointment},
    repository::Repository,
    services::slots,
};

#[derive(Clone)]
pub struct BookingService {
    repository: Repository,
    store_id: Uuid,
    booking_timeout: Duration,
}

impl BookingService {
    pub fn new(repository: Repository, store_id: Uuid, booking_timeout: Duration) -> Self {
        Self {
            repository,
            store_id,
            booking_timeout,
        }
    }

    /// Book an appointment for a customer with a barber at a slot.
    ///
    /// Grid policy: only timestamps on the day grid are bookable; off-grid
    /// times are rejected up front as validation errors.
    ///
    /// The reservation itself is bounded by the configured deadline. On
    /// expiry the in-flight transaction is dropped (rolled back) and the
    /// outcome is a storage fault; no partial state survives, so callers may
    /// retry safely.
    pub async fn book_appointment(
        &self,
        user_id: &str,
        barber_id: &str,
        date: &str,
        time: &str,
    ) -> AppResult<Appointment> {
        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::Validation("Invalid user ID format".to_string()))?;
        let barber_id = Uuid::parse_str(barber_id)
            .map_err(|_| AppError::Validation("Invalid barber ID format".to_string()))?;

        let profile = self
            .repository
            .profiles
            .find_by_account(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let membership = self
            .repository
            .memberships
            .find_staff(barber_id, self.store_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Barber not found".to_string()))?;

        let starts_at = slots::parse_slot(date, time)?;
        if !slots::is_on_grid(starts_at) {
            return Err(AppError::Validation(
                "Requested time is outside bookable hours".to_string(),
            ));
        }

        let booking = NewAppointment {
            account_id: profile.account_id,
            membership_id: membership.id,
            store_id: self.store_id,
            starts_at,
        };

        let appointment = match tokio::time::timeout(
            self.booking_timeout,
            self.repository.appointments.book_slot(&booking),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    "Booking for membership {} at {} exceeded {:?} deadline",
                    membership.id,
                    starts_at,
                    self.booking_timeout
                );
                return Err(AppError::Storage("Booking deadline exceeded".to_string()));
            }
        };

        tracing::info!(
            "Booked appointment {} for account {} with membership {} at {}",
            appointment.id,
            appointment.account_id,
            appointment.membership_id,
            appointment.starts_at
        );

        Ok(appointment)
    }
}
