// Facility configuration and motel policy constants

// Maximum number of pets a single reservation may bring under the motel pet
// policy.
pub const MAX_PETS_PER_RESERVATION: u32 = 2;

// Flat surcharge in dollars charged per pet.
pub const PET_SURCHARGE_PER_PET: f64 = 20.0;

// Controls when the per-pet surcharge is applied to a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetSurchargeMode {
    // One flat charge per pet for the whole stay, regardless of length.
    OncePerStay,
    // Charge per pet scaled by the stay length in nights.
    OncePerNight,
}

// Facility-wide knobs for catalog generation and pricing policy. The default
// matches the current deployment: two levels of twenty rooms each.
#[derive(Debug, Clone)]
pub struct FacilityConfig {
    pub level_count: u32,
    pub rooms_per_level: u32,
    // None draws bed counts from OS entropy on every catalog build; a fixed
    // seed makes the catalog reproducible for tests.
    pub bed_count_seed: Option<u64>,
    pub pet_surcharge_mode: PetSurchargeMode,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            level_count: 2,
            rooms_per_level: 20,
            bed_count_seed: None,
            pet_surcharge_mode: PetSurchargeMode::OncePerStay,
        }
    }
}

impl FacilityConfig {
    pub fn total_rooms(&self) -> usize {
        (self.level_count * self.rooms_per_level) as usize
    }
}
