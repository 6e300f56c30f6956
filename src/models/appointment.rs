//! Appointment model and related types

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Appointment lifecycle status (stored as Postgres enum `appointment_status`)
///
/// Rows are never deleted; a cancellation flips the status and thereby frees
/// the slot for rebooking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Cancelled,
    Completed,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

/// Appointment row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    /// Customer account id (references `user_profiles.account_id`)
    pub account_id: Uuid,
    /// Staff membership id (references `store_memberships.id`)
    pub membership_id: Uuid,
    pub store_id: Uuid,
    /// Minute-aligned start of the slot in the store's operating calendar
    pub starts_at: NaiveDateTime,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for a scheduled appointment insert
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub account_id: Uuid,
    pub membership_id: Uuid,
    pub store_id: Uuid,
    pub starts_at: NaiveDateTime,
}
