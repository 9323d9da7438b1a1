use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::airline_controller::AirlineController;
use crate::dto::airline_dto::{AirlineResponse, AirlinesInCityQuery, CreateAirlineRequest};
use crate::dto::city_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_airline_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_airline))
        .route("/", get(list_airlines))
        .route("/in-city", get(list_airlines_in_city))
        .route("/:id", get(get_airline))
}

async fn create_airline(
    State(state): State<AppState>,
    Json(request): Json<CreateAirlineRequest>,
) -> Result<Json<ApiResponse<AirlineResponse>>, AppError> {
    let controller = AirlineController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_airline(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AirlineResponse>, AppError> {
    let controller = AirlineController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_airlines(
    State(state): State<AppState>,
) -> Result<Json<Vec<AirlineResponse>>, AppError> {
    let controller = AirlineController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn list_airlines_in_city(
    State(state): State<AppState>,
    Query(query): Query<AirlinesInCityQuery>,
) -> Result<Json<Vec<AirlineResponse>>, AppError> {
    let controller = AirlineController::new(state.pool.clone());
    let response = controller.list_in_city(&query.city).await?;
    Ok(Json(response))
}
