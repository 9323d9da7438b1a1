use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::city::City;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

// Request para registrar una ciudad
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCityRequest {
    #[validate(length(min = 1, max = 100))]
    pub city_name: String,
}

// Request para renombrar una ciudad existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCityRequest {
    #[validate(length(min = 1, max = 100))]
    pub city_name: String,
}

#[derive(Debug, Serialize)]
pub struct CityResponse {
    pub city_id: i32,
    pub city_name: String,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            city_id: city.city_id,
            city_name: city.city_name,
        }
    }
}
