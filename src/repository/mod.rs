//! Repository layer for database operations

pub mod appointments;
pub mod catalog;
pub mod memberships;
pub mod profiles;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub appointments: appointments::AppointmentsRepository,
    pub memberships: memberships::MembershipsRepository,
    pub profiles: profiles::ProfilesRepository,
    pub catalog: catalog::CatalogRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            appointments: appointments::AppointmentsRepository::new(pool.clone()),
            memberships: memberships::MembershipsRepository::new(pool.clone()),
            profiles: profiles::ProfilesRepository::new(pool.clone()),
            catalog: catalog::CatalogRepository::new(pool.clone()),
            pool,
        }
    }
}
