// Main library file for the motel booking core

// Export modules for each part of the system
pub mod availability;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod pricing;
pub mod store;

#[cfg(test)]
mod fixtures;

// Re-export key types for convenience
pub use availability::available_rooms;
pub use booking::{BookingService, BookingSystem, CancellationOutcome, ReservationOutcome};
pub use catalog::generate_catalog;
pub use config::{
    FacilityConfig, PetSurchargeMode, MAX_PETS_PER_RESERVATION, PET_SURCHARGE_PER_PET,
};
pub use error::BookingError;
pub use model::{Guest, Reservation, Room, GROUND_LEVEL};
pub use pricing::{nightly_rate, total_cost};
pub use store::{InMemoryReservationStore, NullReservationStore, ReservationStore};
