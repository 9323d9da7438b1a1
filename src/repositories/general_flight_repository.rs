use chrono::{NaiveDate, NaiveTime};
use sqlx::MySqlPool;

use crate::models::general_flight::GeneralFlight;
use crate::utils::errors::{classify_db_error, AppError};

// Fila enriquecida para la búsqueda por par de ciudades: el propio
// join ya trae los nombres, así no hay lookups por fila. La aerolínea
// va por LEFT JOIN y puede faltar; el controlador pone el placeholder.
#[derive(Debug, sqlx::FromRow)]
pub struct ScheduleSearchRow {
    #[sqlx(rename = "GeneralFlightID")]
    pub general_flight_id: i32,
    #[sqlx(rename = "TakeoffTime")]
    pub takeoff_time: NaiveTime,
    #[sqlx(rename = "ArrivalTime")]
    pub arrival_time: NaiveTime,
    #[sqlx(rename = "FDay")]
    pub f_day: NaiveDate,
    #[sqlx(rename = "AirlineID")]
    pub airline_id: i32,
    #[sqlx(rename = "NumberSeats")]
    pub number_seats: i32,
    #[sqlx(rename = "seats_booked")]
    pub seats_booked: i32,
    #[sqlx(rename = "AirlineName")]
    pub airline_name: Option<String>,
    #[sqlx(rename = "DepAirportName")]
    pub dep_airport_name: String,
    #[sqlx(rename = "ArrAirportName")]
    pub arr_airport_name: String,
}

pub struct GeneralFlightRepository {
    pool: MySqlPool,
}

impl GeneralFlightRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// seats_booked arranca en 0 para una plantilla nueva; después solo
    /// lo tocan los triggers de reservas.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        takeoff_time: NaiveTime,
        arrival_time: NaiveTime,
        f_day: NaiveDate,
        dep_airport_id: i32,
        arr_airport_id: i32,
        airline_id: i32,
        number_seats: i32,
    ) -> Result<i32, AppError> {
        let result = sqlx::query(
            "INSERT INTO GeneralFlight \
             (TakeoffTime, ArrivalTime, FDay, DepAirport, ArrAirport, AirlineID, NumberSeats, seats_booked) \
             VALUES (?, ?, ?, ?, ?, ?, ?, 0)",
        )
        .bind(takeoff_time)
        .bind(arrival_time)
        .bind(f_day)
        .bind(dep_airport_id)
        .bind(arr_airport_id)
        .bind(airline_id)
        .bind(number_seats)
        .execute(&self.pool)
        .await
        .map_err(|e| classify_db_error("adding flight schedule", e))?;

        Ok(result.last_insert_id() as i32)
    }

    pub async fn find_by_id(
        &self,
        general_flight_id: i32,
    ) -> Result<Option<GeneralFlight>, AppError> {
        let result = sqlx::query_as::<_, GeneralFlight>(
            "SELECT * FROM GeneralFlight WHERE GeneralFlightID = ?",
        )
        .bind(general_flight_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify_db_error("finding flight schedule", e))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<GeneralFlight>, AppError> {
        let result = sqlx::query_as::<_, GeneralFlight>(
            "SELECT * FROM GeneralFlight ORDER BY FDay, TakeoffTime",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify_db_error("listing flight schedules", e))?;

        Ok(result)
    }

    /// Plantillas de vuelo entre dos ciudades. El match por nombre es
    /// parcial y sin distinguir mayúsculas (LIKE con la collation por
    /// defecto del schema).
    pub async fn search_by_cities(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<ScheduleSearchRow>, AppError> {
        let result = sqlx::query_as::<_, ScheduleSearchRow>(
            r#"
            SELECT gf.GeneralFlightID, gf.TakeoffTime, gf.ArrivalTime, gf.FDay,
                   gf.AirlineID, gf.NumberSeats, gf.seats_booked,
                   al.AirlineName,
                   dep_ap.AirportName AS DepAirportName,
                   arr_ap.AirportName AS ArrAirportName
            FROM GeneralFlight gf
            JOIN Airport dep_ap ON gf.DepAirport = dep_ap.AirportID
            JOIN City dep_city ON dep_ap.CityID = dep_city.CityID
            JOIN Airport arr_ap ON gf.ArrAirport = arr_ap.AirportID
            JOIN City arr_city ON arr_ap.CityID = arr_city.CityID
            LEFT JOIN Airline al ON gf.AirlineID = al.AirlineID
            WHERE dep_city.CityName LIKE ? AND arr_city.CityName LIKE ?
            ORDER BY gf.FDay, gf.TakeoffTime
            "#,
        )
        .bind(format!("%{}%", departure_city))
        .bind(format!("%{}%", arrival_city))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify_db_error("searching flight schedules by cities", e))?;

        Ok(result)
    }
}
