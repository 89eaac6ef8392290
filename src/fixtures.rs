// Shared test data builders

use chrono::{DateTime, TimeZone, Utc};

use crate::config::FacilityConfig;
use crate::model::{Guest, Reservation, Room};

pub(crate) fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

// Default topology with the catalog pinned to a seed.
pub(crate) fn seeded_config(seed: u64) -> FacilityConfig {
    FacilityConfig {
        bed_count_seed: Some(seed),
        ..FacilityConfig::default()
    }
}

// Baseline guest with no pets and no accessibility requirement; tests adjust
// the fields they exercise.
pub(crate) fn guest(id: u64, first_name: &str) -> Guest {
    Guest {
        id,
        first_name: first_name.to_string(),
        last_name: "Smith".to_string(),
        required_accessible_rooms: 0,
        pet_count: 0,
        reservation: None,
    }
}

pub(crate) fn room(number: u32, level: u32, bed_count: u8) -> Room {
    Room {
        number,
        level,
        bed_count,
    }
}

pub(crate) fn reservation(
    id: u64,
    guest_id: u64,
    rooms: Vec<Room>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Reservation {
    Reservation {
        id,
        guest_id,
        rooms,
        start_date,
        end_date,
    }
}
