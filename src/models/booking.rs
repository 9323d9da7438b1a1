//! Modelo de Booking
//!
//! Una reserva vincula un Customer con un Flight. GeneralFlightID está
//! desnormalizado en la fila para que los triggers de asientos puedan
//! ajustar seats_booked sin joins; quien inserta debe copiarlo del
//! vuelo referenciado.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado de una reserva. Se persiste como entero en Booking.state.
/// Pending y Confirmed ocupan asiento; Cancelled lo libera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
pub enum BookingState {
    Pending = 0,
    Confirmed = 1,
    Cancelled = 2,
}

impl TryFrom<i32> for BookingState {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BookingState::Pending),
            1 => Ok(BookingState::Confirmed),
            2 => Ok(BookingState::Cancelled),
            other => Err(format!("unknown booking state: {}", other)),
        }
    }
}

impl std::fmt::Display for BookingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingState::Pending => "Pending",
            BookingState::Confirmed => "Confirmed",
            BookingState::Cancelled => "Cancelled",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    #[sqlx(rename = "BookingNumber")]
    pub booking_number: i32,
    #[sqlx(rename = "state")]
    pub state: BookingState,
    #[sqlx(rename = "CustomerID")]
    pub customer_id: String,
    #[sqlx(rename = "FlightID")]
    pub flight_id: i32,
    #[sqlx(rename = "GeneralFlightID")]
    pub general_flight_id: i32,
    #[sqlx(rename = "BookingDate")]
    pub booking_date: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_roundtrip() {
        for state in [
            BookingState::Pending,
            BookingState::Confirmed,
            BookingState::Cancelled,
        ] {
            assert_eq!(BookingState::try_from(state as i32).unwrap(), state);
        }
    }

    #[test]
    fn test_unknown_state_rejected() {
        assert!(BookingState::try_from(3).is_err());
        assert!(BookingState::try_from(-1).is_err());
    }
}
