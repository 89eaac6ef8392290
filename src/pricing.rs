// Nightly rates and reservation pricing

use crate::config::{PetSurchargeMode, PET_SURCHARGE_PER_PET};
use crate::error::BookingError;
use crate::model::{Guest, Reservation};

// Rate table keyed by bed count. Anything outside 1..=3 is an unpriced room
// and contributes nothing rather than failing.
pub fn nightly_rate(bed_count: u8) -> f64 {
    match bed_count {
        1 => 50.0,
        2 => 75.0,
        3 => 90.0,
        _ => 0.0,
    }
}

// Prices a reservation for a guest: the nightly rate of every selected room
// times the stay length, plus the pet surcharge. The stay length is taken
// as-is, fractional days included; date ordering is not validated here.
pub fn total_cost(
    guest: Option<&Guest>,
    reservation: Option<&Reservation>,
    surcharge_mode: PetSurchargeMode,
) -> Result<f64, BookingError> {
    let guest = guest.ok_or(BookingError::MissingGuest)?;
    let reservation = reservation.ok_or(BookingError::MissingReservation)?;
    if reservation.rooms.is_empty() {
        return Err(BookingError::NoRoomsSelected);
    }

    let nights = reservation.nights();

    let mut total = 0.0;
    for room in &reservation.rooms {
        total += nightly_rate(room.bed_count) * nights;
    }

    if guest.pet_count > 0 {
        let surcharge = f64::from(guest.pet_count) * PET_SURCHARGE_PER_PET;
        total += match surcharge_mode {
            PetSurchargeMode::OncePerStay => surcharge,
            PetSurchargeMode::OncePerNight => surcharge * nights,
        };
    }

    Ok(total)
}
