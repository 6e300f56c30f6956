//! Appointments repository: occupancy queries and the atomic booking path
//!
//! The appointment table is the only shared mutable state of the booking
//! core. It is written exclusively through [`AppointmentsRepository::book_slot`],
//! which runs the occupancy re-check and the insert in one transaction. The
//! schema backs this up with a partial unique index over
//! `(membership_id, starts_at) WHERE status = 'scheduled'`, so concurrent
//! bookings for the same slot cannot both commit even across service
//! instances.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::appointment::{Appointment, NewAppointment},
};

#[derive(Clone)]
pub struct AppointmentsRepository {
    pool: Pool<Postgres>,
}

impl AppointmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Check whether a barber already has a non-cancelled appointment at the
    /// exact timestamp.
    ///
    /// "No row" means free; a query failure propagates as an error so that
    /// callers never treat an ambiguous read as availability.
    pub async fn is_occupied(
        &self,
        membership_id: Uuid,
        starts_at: NaiveDateTime,
    ) -> AppResult<bool> {
        let occupied: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM appointments
                WHERE membership_id = $1
                  AND starts_at = $2
                  AND status <> 'cancelled'
            )
            "#,
        )
        .bind(membership_id)
        .bind(starts_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(occupied)
    }

    /// All occupied slot times for a barber on one day, ascending.
    ///
    /// Single range query backing the slot listing, instead of one point
    /// query per grid entry.
    pub async fn occupied_times_for_day(
        &self,
        membership_id: Uuid,
        day: NaiveDate,
    ) -> AppResult<Vec<NaiveDateTime>> {
        let day_start = day.and_time(chrono::NaiveTime::MIN);
        let day_end = day_start + Duration::days(1);

        let times: Vec<NaiveDateTime> = sqlx::query_scalar(
            r#"
            SELECT starts_at FROM appointments
            WHERE membership_id = $1
              AND starts_at >= $2
              AND starts_at < $3
              AND status <> 'cancelled'
            ORDER BY starts_at
            "#,
        )
        .bind(membership_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_all(&self.pool)
        .await?;

        Ok(times)
    }

    /// Reserve a slot: re-check occupancy and insert the scheduled row inside
    /// one transaction.
    ///
    /// A lost race surfaces as [`AppError::SlotUnavailable`], either from the
    /// re-check or from the unique index turning the insert into a no-op.
    /// Returning early drops the transaction, which rolls it back.
    pub async fn book_slot(&self, booking: &NewAppointment) -> AppResult<Appointment> {
        let mut tx = self.pool.begin().await?;

        let occupied: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM appointments
                WHERE membership_id = $1
                  AND starts_at = $2
                  AND status <> 'cancelled'
            )
            "#,
        )
        .bind(booking.membership_id)
        .bind(booking.starts_at)
        .fetch_one(&mut *tx)
        .await?;

        if occupied {
            tracing::debug!(
                "Slot {} already taken for membership {}",
                booking.starts_at,
                booking.membership_id
            );
            return Err(AppError::SlotUnavailable(
                "Barber is not available at this time".to_string(),
            ));
        }

        let inserted = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (id, account_id, membership_id, store_id, starts_at, status)
            VALUES ($1, $2, $3, $4, $5, 'scheduled')
            ON CONFLICT (membership_id, starts_at) WHERE status = 'scheduled' DO NOTHING
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(booking.account_id)
        .bind(booking.membership_id)
        .bind(booking.store_id)
        .bind(booking.starts_at)
        .fetch_optional(&mut *tx)
        .await?;

        // A concurrent transaction won the index race between our check and
        // the insert.
        let appointment = match inserted {
            Some(appointment) => appointment,
            None => {
                tracing::warn!(
                    "Concurrent booking won slot {} for membership {}",
                    booking.starts_at,
                    booking.membership_id
                );
                return Err(AppError::SlotUnavailable(
                    "Barber is not available at this time".to_string(),
                ));
            }
        };

        tx.commit().await?;

        Ok(appointment)
    }
}
