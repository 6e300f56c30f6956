//! API handlers for Trimly REST endpoints

pub mod appointments;
pub mod availability;
pub mod catalog;
pub mod health;
pub mod openapi;
