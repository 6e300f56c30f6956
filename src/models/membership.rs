//! Store membership model (who works where, in what role)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Role within a store (stored as Postgres enum `user_role`)
///
/// Only `Staff` members are bookable barbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Manager,
    Staff,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            UserRole::Admin => "ADMIN",
            UserRole::Manager => "MANAGER",
            UserRole::Staff => "STAFF",
        };
        write!(f, "{}", label)
    }
}

/// Store membership row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoreMembership {
    pub id: Uuid,
    pub store_id: Uuid,
    /// References `user_profiles.account_id`
    pub user_id: Uuid,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
