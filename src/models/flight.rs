//! Modelo de Flight
//!
//! Un Flight es una ocurrencia operacional concreta de un
//! GeneralFlight, con fechas propias, estado y avión opcional.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado operacional de un vuelo. Se persiste como entero en la
/// columna Flight.State.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
pub enum FlightState {
    Scheduled = 0,
    InProgress = 1,
    Completed = 2,
    Cancelled = 3,
}

impl FlightState {
    /// Un vuelo solo acepta reservas mientras está programado o en curso
    pub fn is_bookable(&self) -> bool {
        matches!(self, FlightState::Scheduled | FlightState::InProgress)
    }
}

impl TryFrom<i32> for FlightState {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FlightState::Scheduled),
            1 => Ok(FlightState::InProgress),
            2 => Ok(FlightState::Completed),
            3 => Ok(FlightState::Cancelled),
            other => Err(format!("unknown flight state: {}", other)),
        }
    }
}

impl std::fmt::Display for FlightState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FlightState::Scheduled => "Scheduled",
            FlightState::InProgress => "In Progress",
            FlightState::Completed => "Completed",
            FlightState::Cancelled => "Cancelled",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Flight {
    #[sqlx(rename = "FlightID")]
    pub flight_id: i32,
    #[sqlx(rename = "TakeOffDate")]
    pub take_off_date: NaiveDate,
    #[sqlx(rename = "ArrivalDate")]
    pub arrival_date: NaiveDate,
    #[sqlx(rename = "State")]
    pub state: FlightState,
    #[sqlx(rename = "GeneralFlightID")]
    pub general_flight_id: i32,
    #[sqlx(rename = "AircraftID")]
    pub aircraft_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_roundtrip() {
        for state in [
            FlightState::Scheduled,
            FlightState::InProgress,
            FlightState::Completed,
            FlightState::Cancelled,
        ] {
            assert_eq!(FlightState::try_from(state as i32).unwrap(), state);
        }
    }

    #[test]
    fn test_unknown_state_rejected() {
        assert!(FlightState::try_from(4).is_err());
        assert!(FlightState::try_from(-1).is_err());
    }

    #[test]
    fn test_bookable_states() {
        assert!(FlightState::Scheduled.is_bookable());
        assert!(FlightState::InProgress.is_bookable());
        assert!(!FlightState::Completed.is_bookable());
        assert!(!FlightState::Cancelled.is_bookable());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(FlightState::InProgress.to_string(), "In Progress");
        assert_eq!(FlightState::Scheduled.to_string(), "Scheduled");
    }
}
