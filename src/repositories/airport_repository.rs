use sqlx::MySqlPool;

use crate::models::airport::Airport;
use crate::utils::errors::{classify_db_error, AppError};

pub struct AirportRepository {
    pool: MySqlPool,
}

impl AirportRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, airport_name: &str, city_id: i32) -> Result<i32, AppError> {
        let result = sqlx::query("INSERT INTO Airport (AirportName, CityID) VALUES (?, ?)")
            .bind(airport_name)
            .bind(city_id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_db_error("adding airport", e))?;

        Ok(result.last_insert_id() as i32)
    }

    pub async fn find_by_id(&self, airport_id: i32) -> Result<Option<Airport>, AppError> {
        let result = sqlx::query_as::<_, Airport>("SELECT * FROM Airport WHERE AirportID = ?")
            .bind(airport_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_db_error("finding airport", e))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Airport>, AppError> {
        let result = sqlx::query_as::<_, Airport>("SELECT * FROM Airport ORDER BY AirportName")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_db_error("listing airports", e))?;

        Ok(result)
    }
}
