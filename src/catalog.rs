// Room catalog generation
//
// The catalog is rebuilt on every request. Room numbering is fixed by the
// facility topology; bed counts are drawn fresh per build, so callers must
// not assume they are stable between calls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FacilityConfig;
use crate::model::Room;

// Each build draws from its own generator with per-call state, never a
// shared clock-seeded one. A configured seed replaces entropy and pins the
// catalog.
fn bed_count_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

// Builds every room in the facility: levels 1..=level_count, room index
// 0..rooms_per_level on each, numbered level * 100 + index. Bed counts are
// uniform in 1..=3.
pub fn generate_catalog(config: &FacilityConfig) -> Vec<Room> {
    let mut rng = bed_count_rng(config.bed_count_seed);
    let mut rooms = Vec::with_capacity(config.total_rooms());

    for level in 1..=config.level_count {
        for index in 0..config.rooms_per_level {
            rooms.push(Room {
                number: level * 100 + index,
                level,
                bed_count: rng.gen_range(1..=3),
            });
        }
    }

    tracing::debug!("Generated catalog with {} rooms", rooms.len());
    rooms
}
