use sqlx::MySqlPool;
use tracing::info;
use validator::Validate;

use crate::dto::aircraft_dto::{AircraftResponse, CreateAircraftRequest};
use crate::dto::city_dto::ApiResponse;
use crate::repositories::aircraft_repository::AircraftRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::require_text;

pub struct AircraftController {
    repository: AircraftRepository,
}

impl AircraftController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: AircraftRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAircraftRequest,
    ) -> Result<ApiResponse<AircraftResponse>, AppError> {
        request.validate()?;
        let aircraft_name = require_text("Aircraft Name", &request.aircraft_name)?;

        let aircraft_id = self.repository.create(aircraft_name).await?;
        info!("✅ Aircraft added with ID: {}", aircraft_id);

        let response = AircraftResponse {
            aircraft_id,
            aircraft_name: aircraft_name.to_string(),
        };

        Ok(ApiResponse::success_with_message(
            response,
            format!("Aircraft created with ID {}", aircraft_id),
        ))
    }

    pub async fn get_by_id(&self, aircraft_id: i32) -> Result<AircraftResponse, AppError> {
        let aircraft = self
            .repository
            .find_by_id(aircraft_id)
            .await?
            .ok_or_else(|| not_found_error("Aircraft", &aircraft_id.to_string()))?;

        Ok(aircraft.into())
    }

    pub async fn list(&self) -> Result<Vec<AircraftResponse>, AppError> {
        let aircraft = self.repository.list_all().await?;
        Ok(aircraft.into_iter().map(AircraftResponse::from).collect())
    }
}
