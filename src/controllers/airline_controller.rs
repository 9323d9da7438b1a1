use sqlx::MySqlPool;
use tracing::info;
use validator::Validate;

use crate::dto::airline_dto::{AirlineResponse, CreateAirlineRequest};
use crate::dto::city_dto::ApiResponse;
use crate::repositories::airline_repository::AirlineRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::require_text;

pub struct AirlineController {
    repository: AirlineRepository,
}

impl AirlineController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: AirlineRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAirlineRequest,
    ) -> Result<ApiResponse<AirlineResponse>, AppError> {
        request.validate()?;
        let airline_name = require_text("Airline Name", &request.airline_name)?;

        let airline_id = self.repository.create(airline_name).await?;
        info!("✅ Airline added with ID: {}", airline_id);

        let response = AirlineResponse {
            airline_id,
            airline_name: airline_name.to_string(),
        };

        Ok(ApiResponse::success_with_message(
            response,
            format!("Airline created with ID {}", airline_id),
        ))
    }

    pub async fn get_by_id(&self, airline_id: i32) -> Result<AirlineResponse, AppError> {
        let airline = self
            .repository
            .find_by_id(airline_id)
            .await?
            .ok_or_else(|| not_found_error("Airline", &airline_id.to_string()))?;

        Ok(airline.into())
    }

    pub async fn list(&self) -> Result<Vec<AirlineResponse>, AppError> {
        let airlines = self.repository.list_all().await?;
        Ok(airlines.into_iter().map(AirlineResponse::from).collect())
    }

    /// Aerolíneas que despegan de una ciudad (match parcial de nombre,
    /// orden descendente por nombre)
    pub async fn list_in_city(&self, city: &str) -> Result<Vec<AirlineResponse>, AppError> {
        let city = require_text("City Name", city)?;
        let airlines = self.repository.list_in_city(city).await?;
        Ok(airlines.into_iter().map(AirlineResponse::from).collect())
    }
}
