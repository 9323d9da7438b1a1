use sqlx::MySqlPool;

use crate::models::aircraft::Aircraft;
use crate::utils::errors::{classify_db_error, AppError};

pub struct AircraftRepository {
    pool: MySqlPool,
}

impl AircraftRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, aircraft_name: &str) -> Result<i32, AppError> {
        let result = sqlx::query("INSERT INTO Aircraft (AircraftName) VALUES (?)")
            .bind(aircraft_name)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_db_error("adding aircraft", e))?;

        Ok(result.last_insert_id() as i32)
    }

    pub async fn find_by_id(&self, aircraft_id: i32) -> Result<Option<Aircraft>, AppError> {
        let result = sqlx::query_as::<_, Aircraft>("SELECT * FROM Aircraft WHERE AircraftID = ?")
            .bind(aircraft_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_db_error("finding aircraft", e))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Aircraft>, AppError> {
        let result = sqlx::query_as::<_, Aircraft>("SELECT * FROM Aircraft ORDER BY AircraftName")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_db_error("listing aircraft", e))?;

        Ok(result)
    }
}
