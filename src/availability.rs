// Availability computation over the generated catalog and the stored
// reservation set

use chrono::{DateTime, Utc};

use crate::catalog::generate_catalog;
use crate::config::FacilityConfig;
use crate::error::BookingError;
use crate::model::Room;
use crate::store::ReservationStore;

// Rooms free for the requested window under the two policy flags.
//
// Occupancy follows the store's range rule: only reservations contained
// entirely inside the window count against a room. Results keep catalog build
// order with occupied entries dropped.
pub fn available_rooms<S: ReservationStore>(
    config: &FacilityConfig,
    store: &S,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    require_accessible: bool,
    require_pet_friendly: bool,
) -> Result<Vec<Room>, BookingError> {
    if start_date >= end_date {
        return Err(BookingError::InvalidDateRange);
    }

    let mut rooms = generate_catalog(config);
    let reservations = store.list_in_range(start_date, end_date)?;

    for reservation in &reservations {
        for reserved in &reservation.rooms {
            rooms.retain(|room| room.number != reserved.number);
        }
    }

    if require_accessible {
        rooms.retain(|room| room.is_accessible());
    }
    if require_pet_friendly {
        rooms.retain(|room| room.is_pet_friendly());
    }

    tracing::debug!(
        "{} of {} rooms available between {} and {}",
        rooms.len(),
        config.total_rooms(),
        start_date,
        end_date
    );
    Ok(rooms)
}
