//! Flujo de reservas
//!
//! Único camino que combina varias entidades: cliente, vuelo
//! operacional y plantilla. La consistencia de seats_booked NO se
//! mantiene aquí: los triggers de la base de datos incrementan y
//! decrementan el contador en cada transición de estado de la reserva.
//! Este servicio solo hace una comprobación previa sobre un snapshot
//! (que puede quedar obsoleto) y traduce el rechazo del trigger a
//! CapacityExceeded para que el cliente refresque su lista.

use chrono::Utc;
use sqlx::MySqlPool;
use tracing::info;

use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest};
use crate::dto::city_dto::ApiResponse;
use crate::dto::flight_dto::BookableFlightResponse;
use crate::models::booking::BookingState;
use crate::models::booking_detail::BookingDetail;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::flight_repository::FlightRepository;
use crate::repositories::general_flight_repository::GeneralFlightRepository;
use crate::services::display_service::DisplayService;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::require_text;

pub struct BookingService {
    booking_repository: BookingRepository,
    flight_repository: FlightRepository,
    general_flight_repository: GeneralFlightRepository,
    customer_repository: CustomerRepository,
    display: DisplayService,
}

impl BookingService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            booking_repository: BookingRepository::new(pool.clone()),
            flight_repository: FlightRepository::new(pool.clone()),
            general_flight_repository: GeneralFlightRepository::new(pool.clone()),
            customer_repository: CustomerRepository::new(pool.clone()),
            display: DisplayService::new(pool),
        }
    }

    /// Crear una reserva. El GeneralFlightID se copia del vuelo
    /// resuelto para mantener la desnormalización en sincronía; el
    /// incremento de asientos corre por cuenta del trigger de
    /// inserción.
    pub async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let customer_id = require_text("Customer ID", &request.customer_id)?;

        let customer = self
            .customer_repository
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| not_found_error("Customer", customer_id))?;

        let flight = self
            .flight_repository
            .find_by_id(request.flight_id)
            .await?
            .ok_or_else(|| not_found_error("Flight", &request.flight_id.to_string()))?;

        if !flight.state.is_bookable() {
            return Err(AppError::BadRequest(format!(
                "Flight {} is not open for booking (state: {})",
                flight.flight_id, flight.state
            )));
        }

        // Comprobación previa sobre el último snapshot. Puede quedar
        // obsoleta entre la lectura y el INSERT; la palabra final la
        // tiene el trigger.
        let schedule = self
            .general_flight_repository
            .find_by_id(flight.general_flight_id)
            .await?
            .ok_or_else(|| {
                not_found_error("Flight schedule", &flight.general_flight_id.to_string())
            })?;

        if schedule.seats_available() <= 0 {
            return Err(AppError::CapacityExceeded(format!(
                "No available seats left on flight schedule {}",
                schedule.general_flight_id
            )));
        }

        let state = request.state.unwrap_or(BookingState::Pending);
        let booking_date = Utc::now().naive_utc();

        let booking_number = self
            .booking_repository
            .create(
                state,
                &customer.customer_id,
                flight.flight_id,
                flight.general_flight_id,
                booking_date,
            )
            .await?;

        info!(
            "✅ Booking successful! Booking Number: {} for Customer: {} on Flight ID: {}",
            booking_number, customer.customer_id, flight.flight_id
        );

        let response = BookingResponse {
            booking_number,
            state,
            customer_id: customer.customer_id,
            flight_id: flight.flight_id,
            general_flight_id: flight.general_flight_id,
            booking_date,
        };

        Ok(ApiResponse::success_with_message(
            response,
            format!("Booking created with number {}", booking_number),
        ))
    }

    pub async fn get_booking(&self, booking_number: i32) -> Result<BookingResponse, AppError> {
        let booking = self
            .booking_repository
            .find_by_number(booking_number)
            .await?
            .ok_or_else(|| not_found_error("Booking", &booking_number.to_string()))?;

        Ok(booking.into())
    }

    /// Cambiar el estado de una reserva existente. El trigger de
    /// actualización ajusta los asientos (libera al cancelar, vuelve a
    /// ocupar al reactivar); reactivar contra una plantilla llena
    /// devuelve CapacityExceeded.
    pub async fn update_booking_state(
        &self,
        booking_number: i32,
        new_state: BookingState,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self
            .booking_repository
            .find_by_number(booking_number)
            .await?
            .ok_or_else(|| not_found_error("Booking", &booking_number.to_string()))?;

        if booking.state == new_state {
            // Sin transición no hay trigger que disparar
            return Ok(ApiResponse::success_with_message(
                booking.into(),
                format!("Booking {} already in state {}", booking_number, new_state),
            ));
        }

        let updated = self
            .booking_repository
            .update_state(booking_number, new_state)
            .await?;

        if !updated {
            return Err(AppError::Internal(format!(
                "Booking {} was not updated",
                booking_number
            )));
        }

        info!(
            "✅ Booking {} updated: {} -> {}",
            booking_number, booking.state, new_state
        );

        let mut response: BookingResponse = booking.into();
        response.state = new_state;

        Ok(ApiResponse::success_with_message(
            response,
            format!("Booking {} updated to {}", booking_number, new_state),
        ))
    }

    /// Detalle desnormalizado de una reserva (un único multi-join)
    pub async fn booking_details(&self, booking_number: i32) -> Result<BookingDetail, AppError> {
        self.booking_repository
            .find_details(booking_number)
            .await?
            .ok_or_else(|| not_found_error("Booking", &booking_number.to_string()))
    }

    /// Vuelos que hoy aceptan reservas, con nombres de aeropuerto
    /// resueltos best-effort fila a fila
    pub async fn bookable_flights(&self) -> Result<Vec<BookableFlightResponse>, AppError> {
        let rows = self.flight_repository.list_bookable().await?;

        let mut flights = Vec::with_capacity(rows.len());
        for row in rows {
            let dep_airport = self.display.airport_name(row.dep_airport_id).await;
            let arr_airport = self.display.airport_name(row.arr_airport_id).await;
            flights.push(BookableFlightResponse {
                flight_id: row.flight_id,
                dep_airport,
                arr_airport,
                take_off_date: row.take_off_date,
                state: row.state.to_string(),
                seats_available: row.number_seats - row.seats_booked,
            });
        }

        Ok(flights)
    }
}
