// Domain entities for the motel inventory and its reservations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pricing;

// Rooms on this level are both handicap-accessible and pet-friendly.
pub const GROUND_LEVEL: u32 = 1;

// A single room in the facility. Identity is the room number; the
// accessibility and pet flags derive from the level alone and cannot be set
// per room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: u32,
    pub level: u32,
    pub bed_count: u8,
}

impl Room {
    pub fn is_accessible(&self) -> bool {
        self.level == GROUND_LEVEL
    }

    pub fn is_pet_friendly(&self) -> bool {
        self.level == GROUND_LEVEL
    }

    pub fn cost_per_night(&self) -> f64 {
        pricing::nightly_rate(self.bed_count)
    }
}

// A guest profile as supplied by the hosting layer per request. The core
// never persists guests itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub required_accessible_rooms: u32,
    pub pet_count: u32,
    pub reservation: Option<Reservation>,
}

// A proposed or stored reservation. `id` stays 0 until a storage backend
// assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: u64,
    pub guest_id: u64,
    pub rooms: Vec<Room>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Reservation {
    // Stay length in nights. Fractional when the bounds carry a time of day,
    // negative when the bounds are inverted; callers that care validate the
    // ordering themselves.
    pub fn nights(&self) -> f64 {
        (self.end_date - self.start_date).num_milliseconds() as f64 / 86_400_000.0
    }
}
