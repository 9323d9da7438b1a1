use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, UpdateBookingStateRequest};
use crate::dto::city_dto::ApiResponse;
use crate::dto::flight_dto::BookableFlightResponse;
use crate::models::booking_detail::BookingDetail;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/bookable-flights", get(list_bookable_flights))
        .route("/:number", get(get_booking))
        .route("/:number/details", get(get_booking_details))
        .route("/:number/state", put(update_booking_state))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<Json<BookingResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.get_by_number(number).await?;
    Ok(Json(response))
}

async fn get_booking_details(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<Json<BookingDetail>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.details(number).await?;
    Ok(Json(response))
}

async fn update_booking_state(
    State(state): State<AppState>,
    Path(number): Path<i32>,
    Json(request): Json<UpdateBookingStateRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.update_state(number, request).await?;
    Ok(Json(response))
}

async fn list_bookable_flights(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookableFlightResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.bookable_flights().await?;
    Ok(Json(response))
}
