use sqlx::MySqlPool;

use crate::models::airline::Airline;
use crate::utils::errors::{classify_db_error, AppError};

pub struct AirlineRepository {
    pool: MySqlPool,
}

impl AirlineRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, airline_name: &str) -> Result<i32, AppError> {
        let result = sqlx::query("INSERT INTO Airline (AirlineName) VALUES (?)")
            .bind(airline_name)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_db_error("adding airline", e))?;

        Ok(result.last_insert_id() as i32)
    }

    pub async fn find_by_id(&self, airline_id: i32) -> Result<Option<Airline>, AppError> {
        let result = sqlx::query_as::<_, Airline>("SELECT * FROM Airline WHERE AirlineID = ?")
            .bind(airline_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_db_error("finding airline", e))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Airline>, AppError> {
        let result = sqlx::query_as::<_, Airline>("SELECT * FROM Airline ORDER BY AirlineName")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_db_error("listing airlines", e))?;

        Ok(result)
    }

    /// Aerolíneas con algún vuelo programado que despega de una ciudad.
    /// La búsqueda por nombre es parcial (LIKE) y el orden descendente
    /// por nombre es una preferencia de presentación heredada del
    /// requerimiento original.
    pub async fn list_in_city(&self, city_name: &str) -> Result<Vec<Airline>, AppError> {
        let result = sqlx::query_as::<_, Airline>(
            r#"
            SELECT DISTINCT a.AirlineID, a.AirlineName
            FROM GeneralFlight gf
            JOIN Airline a ON gf.AirlineID = a.AirlineID
            JOIN Airport dep_ap ON gf.DepAirport = dep_ap.AirportID
            JOIN City c ON dep_ap.CityID = c.CityID
            WHERE c.CityName LIKE ?
            ORDER BY a.AirlineName DESC
            "#,
        )
        .bind(format!("%{}%", city_name))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify_db_error("listing airlines by city", e))?;

        Ok(result)
    }
}
