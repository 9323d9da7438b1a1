use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::aircraft::Aircraft;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAircraftRequest {
    #[validate(length(min = 1, max = 100))]
    pub aircraft_name: String,
}

#[derive(Debug, Serialize)]
pub struct AircraftResponse {
    pub aircraft_id: i32,
    pub aircraft_name: String,
}

impl From<Aircraft> for AircraftResponse {
    fn from(aircraft: Aircraft) -> Self {
        Self {
            aircraft_id: aircraft.aircraft_id,
            aircraft_name: aircraft.aircraft_name,
        }
    }
}
