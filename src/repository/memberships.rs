//! Store memberships repository (barber identity resolution)

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{catalog::BarberShort, membership::StoreMembership},
};

#[derive(Clone)]
pub struct MembershipsRepository {
    pool: Pool<Postgres>,
}

impl MembershipsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Resolve a person to their staff membership within a store.
    ///
    /// Returns `None` when no `STAFF` row exists; only staff members are
    /// bookable.
    pub async fn find_staff(
        &self,
        user_id: Uuid,
        store_id: Uuid,
    ) -> AppResult<Option<StoreMembership>> {
        let membership = sqlx::query_as::<_, StoreMembership>(
            r#"
            SELECT * FROM store_memberships
            WHERE user_id = $1 AND role = 'STAFF' AND store_id = $2
            "#,
        )
        .bind(user_id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(membership)
    }

    /// List the bookable barbers of a store with their display names
    pub async fn list_staff(&self, store_id: Uuid) -> AppResult<Vec<BarberShort>> {
        let barbers = sqlx::query_as::<_, BarberShort>(
            r#"
            SELECT m.user_id as id, p.full_name as name
            FROM store_memberships m
            JOIN user_profiles p ON p.account_id = m.user_id
            WHERE m.store_id = $1 AND m.role = 'STAFF'
            ORDER BY p.full_name
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(barbers)
    }
}
