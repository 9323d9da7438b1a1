//! Modelo de GeneralFlight
//!
//! Un GeneralFlight es la plantilla recurrente de un vuelo: ruta,
//! horarios y capacidad. Los contadores NumberSeats/seats_booked los
//! mantienen los triggers de la base de datos al insertar o actualizar
//! reservas; esta aplicación solo los lee.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneralFlight {
    #[sqlx(rename = "GeneralFlightID")]
    pub general_flight_id: i32,
    #[sqlx(rename = "TakeoffTime")]
    pub takeoff_time: NaiveTime,
    #[sqlx(rename = "ArrivalTime")]
    pub arrival_time: NaiveTime,
    #[sqlx(rename = "FDay")]
    pub f_day: NaiveDate,
    #[sqlx(rename = "DepAirport")]
    pub dep_airport_id: i32,
    #[sqlx(rename = "ArrAirport")]
    pub arr_airport_id: i32,
    #[sqlx(rename = "AirlineID")]
    pub airline_id: i32,
    #[sqlx(rename = "NumberSeats")]
    pub number_seats: i32,
    #[sqlx(rename = "seats_booked")]
    pub seats_booked: i32,
}

impl GeneralFlight {
    /// Asientos libres según el último snapshot leído. Puede quedar
    /// desactualizado entre la lectura y el envío de una reserva.
    pub fn seats_available(&self) -> i32 {
        self.number_seats - self.seats_booked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(number_seats: i32, seats_booked: i32) -> GeneralFlight {
        GeneralFlight {
            general_flight_id: 1,
            takeoff_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            arrival_time: NaiveTime::from_hms_opt(11, 45, 0).unwrap(),
            f_day: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            dep_airport_id: 10,
            arr_airport_id: 20,
            airline_id: 3,
            number_seats,
            seats_booked,
        }
    }

    #[test]
    fn test_seats_available() {
        assert_eq!(sample(180, 0).seats_available(), 180);
        assert_eq!(sample(180, 179).seats_available(), 1);
        assert_eq!(sample(180, 180).seats_available(), 0);
    }
}
