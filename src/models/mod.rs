//! Data models for Trimly

pub mod appointment;
pub mod catalog;
pub mod membership;
pub mod profile;

// Re-export commonly used types
pub use appointment::{Appointment, AppointmentStatus, NewAppointment};
pub use catalog::{BarberShort, StoreService};
pub use membership::{StoreMembership, UserRole};
pub use profile::UserProfile;
