use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::aircraft_controller::AircraftController;
use crate::dto::aircraft_dto::{AircraftResponse, CreateAircraftRequest};
use crate::dto::city_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_aircraft_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_aircraft))
        .route("/", get(list_aircraft))
        .route("/:id", get(get_aircraft))
}

async fn create_aircraft(
    State(state): State<AppState>,
    Json(request): Json<CreateAircraftRequest>,
) -> Result<Json<ApiResponse<AircraftResponse>>, AppError> {
    let controller = AircraftController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_aircraft(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AircraftResponse>, AppError> {
    let controller = AircraftController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_aircraft(
    State(state): State<AppState>,
) -> Result<Json<Vec<AircraftResponse>>, AppError> {
    let controller = AircraftController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
