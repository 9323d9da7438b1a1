use sqlx::MySqlPool;
use tracing::info;
use validator::Validate;

use crate::dto::airport_dto::{AirportResponse, CreateAirportRequest};
use crate::dto::city_dto::ApiResponse;
use crate::repositories::airport_repository::AirportRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::require_text;

pub struct AirportController {
    repository: AirportRepository,
}

impl AirportController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: AirportRepository::new(pool),
        }
    }

    /// Un CityID inexistente sale como Conflict por la clave foránea
    pub async fn create(
        &self,
        request: CreateAirportRequest,
    ) -> Result<ApiResponse<AirportResponse>, AppError> {
        request.validate()?;
        let airport_name = require_text("Airport Name", &request.airport_name)?;

        let airport_id = self
            .repository
            .create(airport_name, request.city_id)
            .await?;
        info!("✅ Airport added with ID: {}", airport_id);

        let response = AirportResponse {
            airport_id,
            airport_name: airport_name.to_string(),
            city_id: request.city_id,
        };

        Ok(ApiResponse::success_with_message(
            response,
            format!("Airport created with ID {}", airport_id),
        ))
    }

    pub async fn get_by_id(&self, airport_id: i32) -> Result<AirportResponse, AppError> {
        let airport = self
            .repository
            .find_by_id(airport_id)
            .await?
            .ok_or_else(|| not_found_error("Airport", &airport_id.to_string()))?;

        Ok(airport.into())
    }

    pub async fn list(&self) -> Result<Vec<AirportResponse>, AppError> {
        let airports = self.repository.list_all().await?;
        Ok(airports.into_iter().map(AirportResponse::from).collect())
    }
}
