use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::airline::Airline;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirlineRequest {
    #[validate(length(min = 1, max = 100))]
    pub airline_name: String,
}

// Query de aerolíneas que operan desde una ciudad
#[derive(Debug, Deserialize)]
pub struct AirlinesInCityQuery {
    pub city: String,
}

#[derive(Debug, Serialize)]
pub struct AirlineResponse {
    pub airline_id: i32,
    pub airline_name: String,
}

impl From<Airline> for AirlineResponse {
    fn from(airline: Airline) -> Self {
        Self {
            airline_id: airline.airline_id,
            airline_name: airline.airline_name,
        }
    }
}
