// Reservation storage port and the adapters shipped with the core

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::error::BookingError;
use crate::model::{Guest, Reservation};

// Read/write contract the booking core expects from a reservation backend.
//
// `list_in_range` keeps the range rule in one place: a reservation is in
// range only when both of its own bounds fall inside the queried window.
// This is strict containment, not a general overlap test; a stay straddling
// the window does not count.
pub trait ReservationStore: Send + Sync {
    fn list_all(&self) -> Result<Vec<Reservation>, BookingError>;

    fn list_in_range(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, BookingError> {
        if start_date >= end_date {
            return Err(BookingError::InvalidDateRange);
        }
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|r| r.start_date >= start_date && r.end_date <= end_date)
            .collect())
    }

    // Persists the guest profile and the reservation, returning the assigned
    // positive reservation id.
    fn persist(&self, guest: &Guest, reservation: &Reservation) -> Result<u64, BookingError>;

    fn delete(&self, reservation_id: u64) -> Result<(), BookingError>;
}

// Stand-in for the not-yet-wired persistence backend. Reads are always empty
// and deletes are accepted no-ops; the core treats the empty result as a
// normal state, never a failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReservationStore;

impl ReservationStore for NullReservationStore {
    fn list_all(&self) -> Result<Vec<Reservation>, BookingError> {
        Ok(Vec::new())
    }

    fn persist(&self, _guest: &Guest, _reservation: &Reservation) -> Result<u64, BookingError> {
        Err(BookingError::Store(
            "no persistence backend is configured".to_string(),
        ))
    }

    fn delete(&self, _reservation_id: u64) -> Result<(), BookingError> {
        Ok(())
    }
}

// Thread-safe in-memory adapter. Serves as the populated fake in tests and
// works for embedded use; iteration order is insertion order, so range
// queries stay deterministic.
#[derive(Debug)]
pub struct InMemoryReservationStore {
    reservations: RwLock<Vec<Reservation>>,
    next_id: AtomicU64,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self {
            reservations: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    // Seeds the store with existing reservations, keeping their ids as
    // passed. Later persists continue numbering above the highest seeded id.
    pub fn with_reservations(reservations: Vec<Reservation>) -> Self {
        let next_id = reservations.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            reservations: RwLock::new(reservations),
            next_id: AtomicU64::new(next_id),
        }
    }
}

impl Default for InMemoryReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationStore for InMemoryReservationStore {
    fn list_all(&self) -> Result<Vec<Reservation>, BookingError> {
        Ok(self.reservations.read().clone())
    }

    fn persist(&self, _guest: &Guest, reservation: &Reservation) -> Result<u64, BookingError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut stored = reservation.clone();
        stored.id = id;
        self.reservations.write().push(stored);
        Ok(id)
    }

    fn delete(&self, reservation_id: u64) -> Result<(), BookingError> {
        self.reservations.write().retain(|r| r.id != reservation_id);
        Ok(())
    }
}
