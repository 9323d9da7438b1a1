//! Backend de registros de vuelos y reservas para una agencia de viajes
//!
//! Capas: routes → controllers → services → repositories → MySQL.
//! La contabilidad de asientos (seats_booked) la mantienen los
//! triggers del schema; esta aplicación detecta su señal de rechazo y
//! la presenta como un error de disponibilidad distinto de los errores
//! genéricos de base de datos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::cors_middleware;
use state::AppState;

/// Construir el router completo de la API
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/city", routes::city_routes::create_city_router())
        .nest("/api/airport", routes::airport_routes::create_airport_router())
        .nest("/api/airline", routes::airline_routes::create_airline_router())
        .nest("/api/aircraft", routes::aircraft_routes::create_aircraft_router())
        .nest("/api/customer", routes::customer_routes::create_customer_router())
        .nest(
            "/api/schedule",
            routes::general_flight_routes::create_general_flight_router(),
        )
        .nest("/api/flight", routes::flight_routes::create_flight_router())
        .nest("/api/booking", routes::booking_routes::create_booking_router())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "travel-booking",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
