use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::flight_controller::FlightController;
use crate::dto::city_dto::ApiResponse;
use crate::dto::flight_dto::{
    CreateFlightRequest, FlightPeriodSearchQuery, FlightResponse, FlightSearchResult,
    UpdateFlightRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_flight_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_flight))
        .route("/", get(list_flights))
        .route("/search", get(search_flights))
        .route("/:id", get(get_flight))
        .route("/:id", put(update_flight))
}

async fn create_flight(
    State(state): State<AppState>,
    Json(request): Json<CreateFlightRequest>,
) -> Result<Json<ApiResponse<FlightResponse>>, AppError> {
    let controller = FlightController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<FlightResponse>, AppError> {
    let controller = FlightController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_flights(
    State(state): State<AppState>,
) -> Result<Json<Vec<FlightResponse>>, AppError> {
    let controller = FlightController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateFlightRequest>,
) -> Result<Json<ApiResponse<FlightResponse>>, AppError> {
    let controller = FlightController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn search_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightPeriodSearchQuery>,
) -> Result<Json<Vec<FlightSearchResult>>, AppError> {
    let controller = FlightController::new(state.pool.clone());
    let response = controller
        .search_by_city_and_period(&query.departure_city, &query.start_date, &query.end_date)
        .await?;
    Ok(Json(response))
}
