use sqlx::MySqlPool;

use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, UpdateBookingStateRequest};
use crate::dto::city_dto::ApiResponse;
use crate::dto::flight_dto::BookableFlightResponse;
use crate::models::booking_detail::BookingDetail;
use crate::services::booking_service::BookingService;
use crate::utils::errors::AppError;

pub struct BookingController {
    service: BookingService,
}

impl BookingController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            service: BookingService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        self.service.create_booking(request).await
    }

    pub async fn get_by_number(&self, booking_number: i32) -> Result<BookingResponse, AppError> {
        self.service.get_booking(booking_number).await
    }

    pub async fn update_state(
        &self,
        booking_number: i32,
        request: UpdateBookingStateRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        self.service
            .update_booking_state(booking_number, request.state)
            .await
    }

    pub async fn details(&self, booking_number: i32) -> Result<BookingDetail, AppError> {
        self.service.booking_details(booking_number).await
    }

    pub async fn bookable_flights(&self) -> Result<Vec<BookableFlightResponse>, AppError> {
        self.service.bookable_flights().await
    }
}
