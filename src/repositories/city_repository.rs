use sqlx::MySqlPool;

use crate::models::city::City;
use crate::utils::errors::{classify_db_error, AppError};

pub struct CityRepository {
    pool: MySqlPool,
}

impl CityRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, city_name: &str) -> Result<i32, AppError> {
        let result = sqlx::query("INSERT INTO City (CityName) VALUES (?)")
            .bind(city_name)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_db_error("adding city", e))?;

        Ok(result.last_insert_id() as i32)
    }

    pub async fn find_by_id(&self, city_id: i32) -> Result<Option<City>, AppError> {
        let result = sqlx::query_as::<_, City>("SELECT * FROM City WHERE CityID = ?")
            .bind(city_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_db_error("finding city", e))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<City>, AppError> {
        let result = sqlx::query_as::<_, City>("SELECT * FROM City ORDER BY CityName")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_db_error("listing cities", e))?;

        Ok(result)
    }

    pub async fn update_name(&self, city_id: i32, city_name: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE City SET CityName = ? WHERE CityID = ?")
            .bind(city_name)
            .bind(city_id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_db_error("updating city", e))?;

        Ok(result.rows_affected() > 0)
    }
}
