//! User profiles repository (customer identity resolution)

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{error::AppResult, models::profile::UserProfile};

#[derive(Clone)]
pub struct ProfilesRepository {
    pool: Pool<Postgres>,
}

impl ProfilesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a profile by account id
    pub async fn find_by_account(&self, account_id: Uuid) -> AppResult<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            "SELECT * FROM user_profiles WHERE account_id = $1",
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }
}
