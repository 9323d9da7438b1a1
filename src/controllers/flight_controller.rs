use sqlx::MySqlPool;
use tracing::info;

use crate::dto::city_dto::ApiResponse;
use crate::dto::flight_dto::{
    CreateFlightRequest, FlightResponse, FlightSearchResult, UpdateFlightRequest,
};
use crate::models::flight::FlightState;
use crate::repositories::flight_repository::FlightRepository;
use crate::repositories::general_flight_repository::GeneralFlightRepository;
use crate::services::display_service::DisplayService;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{parse_date, require_text};

pub struct FlightController {
    repository: FlightRepository,
    general_flight_repository: GeneralFlightRepository,
    display: DisplayService,
}

impl FlightController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: FlightRepository::new(pool.clone()),
            general_flight_repository: GeneralFlightRepository::new(pool.clone()),
            display: DisplayService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateFlightRequest,
    ) -> Result<ApiResponse<FlightResponse>, AppError> {
        let take_off_date = parse_date("Takeoff Date", &request.take_off_date)?;
        let arrival_date = parse_date("Arrival Date", &request.arrival_date)?;

        if arrival_date < take_off_date {
            return Err(AppError::BadRequest(
                "Arrival Date cannot be before Takeoff Date.".to_string(),
            ));
        }

        let state = request.state.unwrap_or(FlightState::Scheduled);

        let flight_id = self
            .repository
            .create(
                take_off_date,
                arrival_date,
                state,
                request.general_flight_id,
                request.aircraft_id,
            )
            .await?;
        info!("✅ Flight added with ID: {}", flight_id);

        let response = FlightResponse {
            flight_id,
            take_off_date,
            arrival_date,
            state,
            general_flight_id: request.general_flight_id,
            aircraft_id: request.aircraft_id,
        };

        Ok(ApiResponse::success_with_message(
            response,
            format!("Flight created with ID {}", flight_id),
        ))
    }

    pub async fn get_by_id(&self, flight_id: i32) -> Result<FlightResponse, AppError> {
        let flight = self
            .repository
            .find_by_id(flight_id)
            .await?
            .ok_or_else(|| not_found_error("Flight", &flight_id.to_string()))?;

        Ok(flight.into())
    }

    pub async fn list(&self) -> Result<Vec<FlightResponse>, AppError> {
        let flights = self.repository.list_all().await?;
        Ok(flights.into_iter().map(FlightResponse::from).collect())
    }

    /// Reprogramar fechas y/o estado de un vuelo existente
    pub async fn update(
        &self,
        flight_id: i32,
        request: UpdateFlightRequest,
    ) -> Result<ApiResponse<FlightResponse>, AppError> {
        let take_off_date = parse_date("New Takeoff Date", &request.take_off_date)?;
        let arrival_date = parse_date("New Arrival Date", &request.arrival_date)?;

        if arrival_date < take_off_date {
            return Err(AppError::BadRequest(
                "New Arrival Date cannot be before New Takeoff Date.".to_string(),
            ));
        }

        let flight = self
            .repository
            .find_by_id(flight_id)
            .await?
            .ok_or_else(|| not_found_error("Flight", &flight_id.to_string()))?;

        let updated = self
            .repository
            .update_dates_and_state(flight_id, take_off_date, arrival_date, request.state)
            .await?;
        if !updated {
            return Err(not_found_error("Flight", &flight_id.to_string()));
        }
        info!("✅ Flight {} updated", flight_id);

        let response = FlightResponse {
            flight_id,
            take_off_date,
            arrival_date,
            state: request.state,
            general_flight_id: flight.general_flight_id,
            aircraft_id: flight.aircraft_id,
        };

        Ok(ApiResponse::success_with_message(
            response,
            format!("Flight {} updated", flight_id),
        ))
    }

    /// Vuelos que despegan de una ciudad dentro de un período. Los
    /// nombres se resuelven fila a fila, best-effort: un lookup fallido
    /// degrada esa celda al placeholder y el listado sigue.
    pub async fn search_by_city_and_period(
        &self,
        departure_city: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<FlightSearchResult>, AppError> {
        let departure_city = require_text("Departure City", departure_city)?;
        let start_date = parse_date("Start Date", start_date)?;
        let end_date = parse_date("End Date", end_date)?;

        if end_date < start_date {
            return Err(AppError::BadRequest(
                "End Date cannot be before Start Date.".to_string(),
            ));
        }

        let flights = self
            .repository
            .search_from_city_in_period(departure_city, start_date, end_date)
            .await?;

        let mut results = Vec::with_capacity(flights.len());
        for flight in flights {
            let mut airline = format!("Schedule:{}", flight.general_flight_id);
            let mut departure_city_name = "N/A".to_string();
            let mut arrival_city_name = "N/A".to_string();
            let mut seats_available = 0;

            if let Ok(Some(schedule)) = self
                .general_flight_repository
                .find_by_id(flight.general_flight_id)
                .await
            {
                seats_available = schedule.seats_available();
                airline = self.display.airline_name(schedule.airline_id).await;
                departure_city_name =
                    self.display.city_name_of_airport(schedule.dep_airport_id).await;
                arrival_city_name =
                    self.display.city_name_of_airport(schedule.arr_airport_id).await;
            }

            let aircraft = self.display.aircraft_label(flight.aircraft_id).await;

            results.push(FlightSearchResult {
                flight_id: flight.flight_id,
                airline,
                departure_city: departure_city_name,
                arrival_city: arrival_city_name,
                take_off_date: flight.take_off_date,
                arrival_date: flight.arrival_date,
                state: flight.state.to_string(),
                aircraft,
                seats_available,
            });
        }

        Ok(results)
    }
}
