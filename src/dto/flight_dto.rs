use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::flight::{Flight, FlightState};

// Request para crear un vuelo operacional. El estado por defecto es
// Scheduled; el avión puede asignarse más tarde.
#[derive(Debug, Deserialize)]
pub struct CreateFlightRequest {
    pub take_off_date: String,
    pub arrival_date: String,
    pub state: Option<FlightState>,
    pub general_flight_id: i32,
    pub aircraft_id: Option<i32>,
}

// Request para reprogramar un vuelo (fechas y/o estado)
#[derive(Debug, Deserialize)]
pub struct UpdateFlightRequest {
    pub take_off_date: String,
    pub arrival_date: String,
    pub state: FlightState,
}

// Query de vuelos que despegan de una ciudad en un período
#[derive(Debug, Deserialize)]
pub struct FlightPeriodSearchQuery {
    pub departure_city: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize)]
pub struct FlightResponse {
    pub flight_id: i32,
    pub take_off_date: NaiveDate,
    pub arrival_date: NaiveDate,
    pub state: FlightState,
    pub general_flight_id: i32,
    pub aircraft_id: Option<i32>,
}

impl From<Flight> for FlightResponse {
    fn from(flight: Flight) -> Self {
        Self {
            flight_id: flight.flight_id,
            take_off_date: flight.take_off_date,
            arrival_date: flight.arrival_date,
            state: flight.state,
            general_flight_id: flight.general_flight_id,
            aircraft_id: flight.aircraft_id,
        }
    }
}

// Resultado de búsqueda con nombres resueltos para mostrar. Las
// etiquetas de estado van como texto legible ("In Progress").
#[derive(Debug, Serialize)]
pub struct FlightSearchResult {
    pub flight_id: i32,
    pub airline: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub take_off_date: NaiveDate,
    pub arrival_date: NaiveDate,
    pub state: String,
    pub aircraft: String,
    pub seats_available: i32,
}

// Candidato a reserva: solo vuelos abiertos y con asientos libres
#[derive(Debug, Serialize)]
pub struct BookableFlightResponse {
    pub flight_id: i32,
    pub dep_airport: String,
    pub arr_airport: String,
    pub take_off_date: NaiveDate,
    pub state: String,
    pub seats_available: i32,
}
