// Error types for the booking core

use thiserror::Error;

// Contract errors: missing or malformed arguments and store backend failures.
// Policy rejections never surface here; those travel as outcome values so the
// hosting layer can render them to the guest directly.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Guest is required! Please create a guest.")]
    MissingGuest,

    #[error("Reservation is required! Please create a reservation.")]
    MissingReservation,

    #[error("Error! No rooms are selected! Please select a room.")]
    NoRoomsSelected,

    #[error("Start date must precede the end date.")]
    InvalidDateRange,

    #[error("Reservation store error: {0}")]
    Store(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_render_the_caller_facing_text() {
        assert_eq!(
            BookingError::MissingGuest.to_string(),
            "Guest is required! Please create a guest."
        );
        assert_eq!(
            BookingError::MissingReservation.to_string(),
            "Reservation is required! Please create a reservation."
        );
        assert_eq!(
            BookingError::NoRoomsSelected.to_string(),
            "Error! No rooms are selected! Please select a room."
        );
        assert_eq!(
            BookingError::InvalidDateRange.to_string(),
            "Start date must precede the end date."
        );
    }

    #[test]
    fn store_errors_carry_the_backend_detail() {
        let err = BookingError::Store("connection refused".to_string());
        assert_eq!(err.to_string(), "Reservation store error: connection refused");
    }
}
