use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::airport::Airport;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirportRequest {
    #[validate(length(min = 1, max = 100))]
    pub airport_name: String,
    pub city_id: i32,
}

#[derive(Debug, Serialize)]
pub struct AirportResponse {
    pub airport_id: i32,
    pub airport_name: String,
    pub city_id: i32,
}

impl From<Airport> for AirportResponse {
    fn from(airport: Airport) -> Self {
        Self {
            airport_id: airport.airport_id,
            airport_name: airport.airport_name,
            city_id: airport.city_id,
        }
    }
}
