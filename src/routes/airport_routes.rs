use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::airport_controller::AirportController;
use crate::dto::airport_dto::{AirportResponse, CreateAirportRequest};
use crate::dto::city_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_airport_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_airport))
        .route("/", get(list_airports))
        .route("/:id", get(get_airport))
}

async fn create_airport(
    State(state): State<AppState>,
    Json(request): Json<CreateAirportRequest>,
) -> Result<Json<ApiResponse<AirportResponse>>, AppError> {
    let controller = AirportController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_airport(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AirportResponse>, AppError> {
    let controller = AirportController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_airports(
    State(state): State<AppState>,
) -> Result<Json<Vec<AirportResponse>>, AppError> {
    let controller = AirportController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
