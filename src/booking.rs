// Reservation validation, creation and cancellation

use std::fmt;

use chrono::{DateTime, Utc};

use crate::availability::available_rooms;
use crate::catalog::generate_catalog;
use crate::config::{FacilityConfig, MAX_PETS_PER_RESERVATION};
use crate::error::BookingError;
use crate::model::{Guest, Reservation, Room};
use crate::pricing;
use crate::store::{NullReservationStore, ReservationStore};

// The operations the booking core exposes to its hosting layer. Guest and
// reservation arguments arrive as options because hosts hand through request
// payloads where either may be absent.
pub trait BookingService: Send + Sync {
    fn get_all_rooms(&self) -> Vec<Room>;

    fn get_available_rooms(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        require_accessible: bool,
        require_pet_friendly: bool,
    ) -> Result<Vec<Room>, BookingError>;

    fn get_reservations(&self) -> Result<Vec<Reservation>, BookingError>;

    fn get_reservations_in_range(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, BookingError>;

    fn calculate_reservation_cost(
        &self,
        guest: Option<&Guest>,
        reservation: Option<&Reservation>,
    ) -> Result<f64, BookingError>;

    fn create_reservation(
        &self,
        guest: Option<&Guest>,
        reservation: Option<&Reservation>,
    ) -> Result<ReservationOutcome, BookingError>;

    fn cancel_reservation(
        &self,
        guest: &Guest,
        reservation: &Reservation,
    ) -> Result<CancellationOutcome, BookingError>;
}

// Outcome of a reservation attempt. Policy rejections are values rather than
// errors; rendering one yields the message shown to the guest.
#[derive(Debug, Clone, PartialEq)]
pub enum ReservationOutcome {
    Confirmed {
        reservation_id: u64,
        total_cost: f64,
    },
    AccessibleRoomMismatch {
        guest_name: String,
        required: u32,
        selected: u32,
    },
    PetQuotaExceeded,
    NoPetFriendlyRoom {
        guest_name: String,
    },
    NoRoomsAvailable,
    RoomConflict {
        room_number: u32,
    },
}

impl ReservationOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ReservationOutcome::Confirmed { .. })
    }
}

impl fmt::Display for ReservationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationOutcome::Confirmed {
                reservation_id,
                total_cost,
            } => write!(
                f,
                "Thanks! The reservation({}) was placed successfully! Your total cost was ${:.2}.",
                reservation_id, total_cost
            ),
            ReservationOutcome::AccessibleRoomMismatch {
                guest_name,
                required,
                selected,
            } => write!(
                f,
                "Error! {} requires {} handicap-accessible rooms, but {} rooms were selected!",
                guest_name, required, selected
            ),
            ReservationOutcome::PetQuotaExceeded => write!(
                f,
                "Sorry! According to the Motel Pet Policy, only a maximum of two pets are allowed. The reservation was not saved."
            ),
            ReservationOutcome::NoPetFriendlyRoom { guest_name } => write!(
                f,
                "Error! {} requires at least one pet-friendly room! Please select a room on the ground floor. The reservation was not saved.",
                guest_name
            ),
            ReservationOutcome::NoRoomsAvailable => write!(
                f,
                "Error! All rooms are booked! Please select another time frame."
            ),
            ReservationOutcome::RoomConflict { room_number } => write!(
                f,
                "Error! Room {} is already reserved. Please select another room.",
                room_number
            ),
        }
    }
}

// Outcome of a cancellation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationOutcome {
    NotFound,
    Deleted,
}

impl fmt::Display for CancellationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancellationOutcome::NotFound => write!(f, "No reservations were found."),
            CancellationOutcome::Deleted => {
                write!(f, "The reservation has been deleted successfully.")
            }
        }
    }
}

// Request-scoped orchestrator over the catalog, pricing and a reservation
// store. Holds no mutable state of its own; every call re-reads the store.
pub struct BookingSystem<S = NullReservationStore> {
    config: FacilityConfig,
    store: S,
}

impl BookingSystem {
    // Production wiring for the current deployment: no persistence backend.
    pub fn new(config: FacilityConfig) -> Self {
        BookingSystem {
            config,
            store: NullReservationStore,
        }
    }
}

impl<S: ReservationStore> BookingSystem<S> {
    pub fn with_store(config: FacilityConfig, store: S) -> Self {
        BookingSystem { config, store }
    }

    pub fn config(&self) -> &FacilityConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ReservationStore> BookingService for BookingSystem<S> {
    fn get_all_rooms(&self) -> Vec<Room> {
        generate_catalog(&self.config)
    }

    fn get_available_rooms(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        require_accessible: bool,
        require_pet_friendly: bool,
    ) -> Result<Vec<Room>, BookingError> {
        available_rooms(
            &self.config,
            &self.store,
            start_date,
            end_date,
            require_accessible,
            require_pet_friendly,
        )
    }

    fn get_reservations(&self) -> Result<Vec<Reservation>, BookingError> {
        self.store.list_all()
    }

    fn get_reservations_in_range(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, BookingError> {
        self.store.list_in_range(start_date, end_date)
    }

    fn calculate_reservation_cost(
        &self,
        guest: Option<&Guest>,
        reservation: Option<&Reservation>,
    ) -> Result<f64, BookingError> {
        pricing::total_cost(guest, reservation, self.config.pet_surcharge_mode)
    }

    fn create_reservation(
        &self,
        guest: Option<&Guest>,
        reservation: Option<&Reservation>,
    ) -> Result<ReservationOutcome, BookingError> {
        let guest = guest.ok_or(BookingError::MissingGuest)?;
        let reservation = reservation.ok_or(BookingError::MissingReservation)?;
        if reservation.rooms.is_empty() {
            return Err(BookingError::NoRoomsSelected);
        }

        // Accessibility quota gate. The running count is compared on every
        // iteration, so a selection is rejected as soon as the count stops
        // matching the requirement, even when rooms later in the list would
        // bring it back in line.
        if guest.required_accessible_rooms > 0 {
            let mut accessible_count = 0;
            for room in &reservation.rooms {
                if room.is_accessible() {
                    accessible_count += 1;
                }
                if accessible_count != guest.required_accessible_rooms {
                    return Ok(ReservationOutcome::AccessibleRoomMismatch {
                        guest_name: guest.first_name.clone(),
                        required: guest.required_accessible_rooms,
                        selected: accessible_count,
                    });
                }
            }
        }

        // Motel pet policy gate.
        if guest.pet_count > MAX_PETS_PER_RESERVATION {
            return Ok(ReservationOutcome::PetQuotaExceeded);
        }

        // Pets need at least one ground-level room in the selection.
        if guest.pet_count > 0 && !reservation.rooms.iter().any(|room| room.is_pet_friendly()) {
            return Ok(ReservationOutcome::NoPetFriendlyRoom {
                guest_name: guest.first_name.clone(),
            });
        }

        // Re-read availability at commit time; the view the caller selected
        // from may be stale by now.
        let available = available_rooms(
            &self.config,
            &self.store,
            reservation.start_date,
            reservation.end_date,
            guest.required_accessible_rooms > 0,
            guest.pet_count > 0,
        )?;

        if available.is_empty() {
            return Ok(ReservationOutcome::NoRoomsAvailable);
        }

        for candidate in &reservation.rooms {
            if !available.iter().any(|room| room.number == candidate.number) {
                return Ok(ReservationOutcome::RoomConflict {
                    room_number: candidate.number,
                });
            }
        }

        let total_cost = pricing::total_cost(
            Some(guest),
            Some(reservation),
            self.config.pet_surcharge_mode,
        )?;

        // Persistence is the backend's job; the core hands back a validated,
        // priced reservation ready for it.
        tracing::debug!(
            "Reservation {} for guest {} confirmed at {:.2}",
            reservation.id,
            guest.id,
            total_cost
        );
        Ok(ReservationOutcome::Confirmed {
            reservation_id: reservation.id,
            total_cost,
        })
    }

    fn cancel_reservation(
        &self,
        guest: &Guest,
        reservation: &Reservation,
    ) -> Result<CancellationOutcome, BookingError> {
        let reservations = self.store.list_all()?;
        if reservations.is_empty() {
            return Ok(CancellationOutcome::NotFound);
        }

        // Only the owning guest may cancel, and ownership is matched on the
        // guest id, never on names.
        let owned: Vec<&Reservation> = reservations
            .iter()
            .filter(|r| r.guest_id == guest.id)
            .collect();
        if owned.is_empty() {
            return Ok(CancellationOutcome::NotFound);
        }

        if owned.iter().any(|r| r.id == reservation.id) {
            self.store.delete(reservation.id)?;
            tracing::debug!("Deleted reservation {}", reservation.id);
        }

        // TODO: a reservation id that matches none of the guest's
        // reservations still falls through to the success message. Needs a
        // product decision on reporting NotFound instead.
        Ok(CancellationOutcome::Deleted)
    }
}
