//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema,
//! su clasificación desde errores de MySQL y su conversión a
//! respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Código de MySQL para violación de clave única (duplicate entry)
const MYSQL_ER_DUP_ENTRY: u32 = 1062;
/// Código de MySQL para violación de clave foránea
const MYSQL_ER_NO_REFERENCED_ROW: u32 = 1452;
/// Código de MySQL para errores señalados por triggers (SIGNAL SQLSTATE '45000')
const MYSQL_ER_SIGNAL_EXCEPTION: u32 = 1644;

/// Marcador en el mensaje del trigger de asientos. El trigger de la base
/// de datos rechaza inserts/updates de Booking con este texto cuando el
/// GeneralFlight asociado ya no tiene asientos libres.
const CAPACITY_MARKER: &str = "no available seats";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("No seats available: {0}")]
    CapacityExceeded(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: msg,
                        details: None,
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }

            AppError::CapacityExceeded(msg) => {
                tracing::warn!("Seat availability error: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Seat Availability Error".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CAPACITY_EXCEEDED".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Detectar la señal "no available seats" del trigger de asientos.
/// El trigger usa SIGNAL SQLSTATE '45000', que MySQL reporta con el
/// código 1644; el texto se compara sin distinguir mayúsculas.
pub fn is_capacity_signal(number: u32, message: &str) -> bool {
    number == MYSQL_ER_SIGNAL_EXCEPTION && message.to_lowercase().contains(CAPACITY_MARKER)
}

/// Clasificar un error de sqlx en el taxón correspondiente.
/// `action` nombra la operación intentada para el mensaje final.
pub fn classify_db_error(action: &str, err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        let message = db_err.message().to_string();
        if let Some(mysql_err) = db_err.try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>() {
            let number: u32 = mysql_err.number().into();
            if is_capacity_signal(number, &message) {
                return AppError::CapacityExceeded(message);
            }
            if number == MYSQL_ER_DUP_ENTRY || number == MYSQL_ER_NO_REFERENCED_ROW {
                return AppError::Conflict(format!("Error {}: {}", action, message));
            }
        }
    }
    AppError::Database(format!("Error {}: {}", action, err))
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_signal_detected() {
        assert!(is_capacity_signal(1644, "No available seats on this flight schedule"));
        assert!(is_capacity_signal(1644, "NO AVAILABLE SEATS"));
        assert!(is_capacity_signal(1644, "booking rejected: no available seats left"));
    }

    #[test]
    fn test_capacity_signal_requires_trigger_code() {
        // Mismo texto pero otro código: no es la señal del trigger
        assert!(!is_capacity_signal(1062, "no available seats"));
        assert!(!is_capacity_signal(0, "no available seats"));
    }

    #[test]
    fn test_capacity_signal_requires_marker() {
        assert!(!is_capacity_signal(1644, "some other trigger message"));
        assert!(!is_capacity_signal(1644, ""));
    }

    #[test]
    fn test_classify_generic_error() {
        let err = classify_db_error("adding city", sqlx::Error::RowNotFound);
        match err {
            AppError::Database(msg) => {
                assert!(msg.contains("adding city"));
            }
            other => panic!("expected Database, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_error_message() {
        let err = not_found_error("Customer", "ABC123");
        assert_eq!(
            err.to_string(),
            "Not found: Customer with id 'ABC123' not found"
        );
    }
}
