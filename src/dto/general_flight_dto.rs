use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::general_flight::GeneralFlight;

// Request para crear una plantilla de vuelo. Fechas y horas llegan
// como texto del formulario (YYYY-MM-DD, HH:MM o HH:MM:SS) y se
// validan en el controlador antes de tocar la base.
#[derive(Debug, Deserialize)]
pub struct CreateGeneralFlightRequest {
    pub takeoff_time: String,
    pub arrival_time: String,
    pub reference_day: String,
    pub dep_airport_id: i32,
    pub arr_airport_id: i32,
    pub airline_id: i32,
    pub number_seats: i32,
}

// Query de búsqueda por par de ciudades (match parcial)
#[derive(Debug, Deserialize)]
pub struct ScheduleSearchQuery {
    pub departure_city: String,
    pub arrival_city: String,
}

#[derive(Debug, Serialize)]
pub struct GeneralFlightResponse {
    pub general_flight_id: i32,
    pub takeoff_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub reference_day: NaiveDate,
    pub dep_airport_id: i32,
    pub arr_airport_id: i32,
    pub airline_id: i32,
    pub number_seats: i32,
    pub seats_booked: i32,
    pub seats_available: i32,
}

impl From<GeneralFlight> for GeneralFlightResponse {
    fn from(gf: GeneralFlight) -> Self {
        let seats_available = gf.seats_available();
        Self {
            general_flight_id: gf.general_flight_id,
            takeoff_time: gf.takeoff_time,
            arrival_time: gf.arrival_time,
            reference_day: gf.f_day,
            dep_airport_id: gf.dep_airport_id,
            arr_airport_id: gf.arr_airport_id,
            airline_id: gf.airline_id,
            number_seats: gf.number_seats,
            seats_booked: gf.seats_booked,
            seats_available,
        }
    }
}

// Resultado de búsqueda con nombres ya resueltos para mostrar
#[derive(Debug, Serialize)]
pub struct ScheduleSearchResult {
    pub general_flight_id: i32,
    pub airline: String,
    pub dep_airport: String,
    pub arr_airport: String,
    pub takeoff_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub reference_day: NaiveDate,
    pub seats_available: i32,
}
