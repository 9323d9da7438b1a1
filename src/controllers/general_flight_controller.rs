use sqlx::MySqlPool;
use tracing::info;

use crate::dto::city_dto::ApiResponse;
use crate::dto::general_flight_dto::{
    CreateGeneralFlightRequest, GeneralFlightResponse, ScheduleSearchResult,
};
use crate::repositories::general_flight_repository::GeneralFlightRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{parse_date, parse_time, require_positive, require_text};

pub struct GeneralFlightController {
    repository: GeneralFlightRepository,
}

impl GeneralFlightController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: GeneralFlightRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateGeneralFlightRequest,
    ) -> Result<ApiResponse<GeneralFlightResponse>, AppError> {
        let takeoff_time = parse_time("Takeoff Time", &request.takeoff_time)?;
        let arrival_time = parse_time("Arrival Time", &request.arrival_time)?;
        let f_day = parse_date("Reference Day", &request.reference_day)?;
        let number_seats = require_positive("Number of Seats", request.number_seats)?;

        // Plantillas de un solo día: la llegada tiene que caer después
        // del despegue
        if arrival_time <= takeoff_time {
            return Err(AppError::BadRequest(
                "Arrival time must be after takeoff time.".to_string(),
            ));
        }

        let general_flight_id = self
            .repository
            .create(
                takeoff_time,
                arrival_time,
                f_day,
                request.dep_airport_id,
                request.arr_airport_id,
                request.airline_id,
                number_seats,
            )
            .await?;
        info!("✅ Flight schedule added with ID: {}", general_flight_id);

        let response = GeneralFlightResponse {
            general_flight_id,
            takeoff_time,
            arrival_time,
            reference_day: f_day,
            dep_airport_id: request.dep_airport_id,
            arr_airport_id: request.arr_airport_id,
            airline_id: request.airline_id,
            number_seats,
            seats_booked: 0,
            seats_available: number_seats,
        };

        Ok(ApiResponse::success_with_message(
            response,
            format!("Flight schedule created with ID {}", general_flight_id),
        ))
    }

    pub async fn get_by_id(
        &self,
        general_flight_id: i32,
    ) -> Result<GeneralFlightResponse, AppError> {
        let schedule = self
            .repository
            .find_by_id(general_flight_id)
            .await?
            .ok_or_else(|| not_found_error("Flight schedule", &general_flight_id.to_string()))?;

        Ok(schedule.into())
    }

    pub async fn list(&self) -> Result<Vec<GeneralFlightResponse>, AppError> {
        let schedules = self.repository.list_all().await?;
        Ok(schedules
            .into_iter()
            .map(GeneralFlightResponse::from)
            .collect())
    }

    /// Búsqueda por par de ciudades. El join ya trae los nombres de
    /// aeropuerto; la aerolínea puede faltar y degrada al placeholder
    /// sin abortar el listado.
    pub async fn search_by_cities(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<ScheduleSearchResult>, AppError> {
        let departure_city = require_text("Departure City", departure_city)?;
        let arrival_city = require_text("Arrival City", arrival_city)?;

        let rows = self
            .repository
            .search_by_cities(departure_city, arrival_city)
            .await?;

        let results = rows
            .into_iter()
            .map(|row| {
                let airline = row
                    .airline_name
                    .unwrap_or_else(|| format!("Airline:{}", row.airline_id));
                ScheduleSearchResult {
                    general_flight_id: row.general_flight_id,
                    airline,
                    dep_airport: row.dep_airport_name,
                    arr_airport: row.arr_airport_name,
                    takeoff_time: row.takeoff_time,
                    arrival_time: row.arrival_time,
                    reference_day: row.f_day,
                    seats_available: row.number_seats - row.seats_booked,
                }
            })
            .collect();

        Ok(results)
    }
}
