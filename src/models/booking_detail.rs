//! Modelo de BookingDetail
//!
//! Fila desnormalizada con el detalle completo de una reserva, el mismo
//! conjunto de campos que devuelve el procedimiento almacenado
//! SP_GetBookingDetails del schema. Aquí se obtiene con un único SELECT
//! multi-join (ver BookingRepository::find_details).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::booking::BookingState;
use crate::models::flight::FlightState;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingDetail {
    #[sqlx(rename = "BookingNumber")]
    pub booking_number: i32,
    #[sqlx(rename = "BookingState")]
    pub booking_state: BookingState,
    #[sqlx(rename = "BookingDate")]
    pub booking_date: NaiveDateTime,

    #[sqlx(rename = "CustomerID")]
    pub customer_id: String,
    #[sqlx(rename = "CustomerFirstName")]
    pub customer_first_name: String,
    #[sqlx(rename = "CustomerLastName")]
    pub customer_last_name: String,
    #[sqlx(rename = "CustomerEmail")]
    pub customer_email: String,
    #[sqlx(rename = "CustomerAddress")]
    pub customer_address: String,
    #[sqlx(rename = "CustomerPhone")]
    pub customer_phone: String,

    #[sqlx(rename = "FlightID")]
    pub flight_id: i32,
    #[sqlx(rename = "FlightTakeOffDate")]
    pub flight_take_off_date: NaiveDate,
    #[sqlx(rename = "FlightArrivalDate")]
    pub flight_arrival_date: NaiveDate,
    #[sqlx(rename = "FlightState")]
    pub flight_state: FlightState,

    #[sqlx(rename = "GeneralFlightID")]
    pub general_flight_id: i32,
    #[sqlx(rename = "GeneralFlightScheduledDeparture")]
    pub scheduled_departure: NaiveTime,
    #[sqlx(rename = "GeneralFlightScheduledArrival")]
    pub scheduled_arrival: NaiveTime,
    #[sqlx(rename = "NumberSeats")]
    pub number_seats: i32,
    #[sqlx(rename = "seats_booked")]
    pub seats_booked: i32,

    #[sqlx(rename = "DepartureAirport")]
    pub departure_airport: String,
    #[sqlx(rename = "DepartureCity")]
    pub departure_city: String,
    #[sqlx(rename = "ArrivalAirport")]
    pub arrival_airport: String,
    #[sqlx(rename = "ArrivalCity")]
    pub arrival_city: String,
    #[sqlx(rename = "AirlineName")]
    pub airline_name: String,
    // Un vuelo puede no tener avión asignado todavía
    #[sqlx(rename = "AircraftName")]
    pub aircraft_name: Option<String>,
}
