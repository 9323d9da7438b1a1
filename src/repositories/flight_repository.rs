use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::models::flight::{Flight, FlightState};
use crate::utils::errors::{classify_db_error, AppError};

// Fila para el listado de vuelos con asientos libres: el join con
// GeneralFlight aplica el filtro de capacidad en el servidor en vez de
// filtrar fila a fila en el cliente.
#[derive(Debug, sqlx::FromRow)]
pub struct BookableFlightRow {
    #[sqlx(rename = "FlightID")]
    pub flight_id: i32,
    #[sqlx(rename = "TakeOffDate")]
    pub take_off_date: NaiveDate,
    #[sqlx(rename = "State")]
    pub state: FlightState,
    #[sqlx(rename = "GeneralFlightID")]
    pub general_flight_id: i32,
    #[sqlx(rename = "DepAirport")]
    pub dep_airport_id: i32,
    #[sqlx(rename = "ArrAirport")]
    pub arr_airport_id: i32,
    #[sqlx(rename = "NumberSeats")]
    pub number_seats: i32,
    #[sqlx(rename = "seats_booked")]
    pub seats_booked: i32,
}

pub struct FlightRepository {
    pool: MySqlPool,
}

impl FlightRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        take_off_date: NaiveDate,
        arrival_date: NaiveDate,
        state: FlightState,
        general_flight_id: i32,
        aircraft_id: Option<i32>,
    ) -> Result<i32, AppError> {
        let result = sqlx::query(
            "INSERT INTO Flight (TakeOffDate, ArrivalDate, State, GeneralFlightID, AircraftID) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(take_off_date)
        .bind(arrival_date)
        .bind(state)
        .bind(general_flight_id)
        .bind(aircraft_id)
        .execute(&self.pool)
        .await
        .map_err(|e| classify_db_error("adding flight", e))?;

        Ok(result.last_insert_id() as i32)
    }

    pub async fn find_by_id(&self, flight_id: i32) -> Result<Option<Flight>, AppError> {
        let result = sqlx::query_as::<_, Flight>("SELECT * FROM Flight WHERE FlightID = ?")
            .bind(flight_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_db_error("finding flight", e))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Flight>, AppError> {
        let result = sqlx::query_as::<_, Flight>("SELECT * FROM Flight ORDER BY TakeOffDate")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_db_error("listing flights", e))?;

        Ok(result)
    }

    /// Vuelos operacionales que despegan de una ciudad dentro de un
    /// período. Los nombres para mostrar se resuelven aparte, fila a
    /// fila, con fallback (ver DisplayService).
    pub async fn search_from_city_in_period(
        &self,
        departure_city: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Flight>, AppError> {
        let result = sqlx::query_as::<_, Flight>(
            r#"
            SELECT fl.*
            FROM Flight fl
            JOIN GeneralFlight gf ON fl.GeneralFlightID = gf.GeneralFlightID
            JOIN Airport dep_ap ON gf.DepAirport = dep_ap.AirportID
            JOIN City dep_city ON dep_ap.CityID = dep_city.CityID
            WHERE dep_city.CityName LIKE ? AND fl.TakeOffDate BETWEEN ? AND ?
            ORDER BY fl.TakeOffDate, gf.TakeoffTime
            "#,
        )
        .bind(format!("%{}%", departure_city))
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify_db_error("searching flights by city and period", e))?;

        Ok(result)
    }

    pub async fn update_dates_and_state(
        &self,
        flight_id: i32,
        take_off_date: NaiveDate,
        arrival_date: NaiveDate,
        state: FlightState,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE Flight SET TakeOffDate = ?, ArrivalDate = ?, State = ? WHERE FlightID = ?",
        )
        .bind(take_off_date)
        .bind(arrival_date)
        .bind(state)
        .bind(flight_id)
        .execute(&self.pool)
        .await
        .map_err(|e| classify_db_error("updating flight", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Candidatos para una reserva nueva: programados o en curso y con
    /// asientos libres en su plantilla. El snapshot puede quedar
    /// obsoleto; el trigger de inserción es la autoridad final.
    pub async fn list_bookable(&self) -> Result<Vec<BookableFlightRow>, AppError> {
        let result = sqlx::query_as::<_, BookableFlightRow>(
            r#"
            SELECT fl.FlightID, fl.TakeOffDate, fl.State, fl.GeneralFlightID,
                   gf.DepAirport, gf.ArrAirport, gf.NumberSeats, gf.seats_booked
            FROM Flight fl
            JOIN GeneralFlight gf ON fl.GeneralFlightID = gf.GeneralFlightID
            WHERE fl.State IN (0, 1) AND gf.seats_booked < gf.NumberSeats
            ORDER BY fl.TakeOffDate
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify_db_error("listing bookable flights", e))?;

        Ok(result)
    }
}
