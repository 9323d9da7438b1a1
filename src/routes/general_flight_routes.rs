use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::general_flight_controller::GeneralFlightController;
use crate::dto::city_dto::ApiResponse;
use crate::dto::general_flight_dto::{
    CreateGeneralFlightRequest, GeneralFlightResponse, ScheduleSearchQuery, ScheduleSearchResult,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_general_flight_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_general_flight))
        .route("/", get(list_general_flights))
        .route("/search", get(search_schedules))
        .route("/:id", get(get_general_flight))
}

async fn create_general_flight(
    State(state): State<AppState>,
    Json(request): Json<CreateGeneralFlightRequest>,
) -> Result<Json<ApiResponse<GeneralFlightResponse>>, AppError> {
    let controller = GeneralFlightController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_general_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GeneralFlightResponse>, AppError> {
    let controller = GeneralFlightController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_general_flights(
    State(state): State<AppState>,
) -> Result<Json<Vec<GeneralFlightResponse>>, AppError> {
    let controller = GeneralFlightController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn search_schedules(
    State(state): State<AppState>,
    Query(query): Query<ScheduleSearchQuery>,
) -> Result<Json<Vec<ScheduleSearchResult>>, AppError> {
    let controller = GeneralFlightController::new(state.pool.clone());
    let response = controller
        .search_by_cities(&query.departure_city, &query.arrival_city)
        .await?;
    Ok(Json(response))
}
