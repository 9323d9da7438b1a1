use sqlx::MySqlPool;
use tracing::info;
use validator::Validate;

use crate::dto::city_dto::{ApiResponse, CityResponse, CreateCityRequest, UpdateCityRequest};
use crate::repositories::city_repository::CityRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::require_text;

pub struct CityController {
    repository: CityRepository,
}

impl CityController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: CityRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCityRequest,
    ) -> Result<ApiResponse<CityResponse>, AppError> {
        request.validate()?;
        let city_name = require_text("City Name", &request.city_name)?;

        let city_id = self.repository.create(city_name).await?;
        info!("✅ City added with ID: {}", city_id);

        let response = CityResponse {
            city_id,
            city_name: city_name.to_string(),
        };

        Ok(ApiResponse::success_with_message(
            response,
            format!("City created with ID {}", city_id),
        ))
    }

    pub async fn get_by_id(&self, city_id: i32) -> Result<CityResponse, AppError> {
        let city = self
            .repository
            .find_by_id(city_id)
            .await?
            .ok_or_else(|| not_found_error("City", &city_id.to_string()))?;

        Ok(city.into())
    }

    pub async fn list(&self) -> Result<Vec<CityResponse>, AppError> {
        let cities = self.repository.list_all().await?;
        Ok(cities.into_iter().map(CityResponse::from).collect())
    }

    pub async fn update(
        &self,
        city_id: i32,
        request: UpdateCityRequest,
    ) -> Result<ApiResponse<CityResponse>, AppError> {
        request.validate()?;
        let city_name = require_text("City Name", &request.city_name)?;

        let updated = self.repository.update_name(city_id, city_name).await?;
        if !updated {
            return Err(not_found_error("City", &city_id.to_string()));
        }

        let response = CityResponse {
            city_id,
            city_name: city_name.to_string(),
        };

        Ok(ApiResponse::success_with_message(
            response,
            format!("City {} updated", city_id),
        ))
    }
}
