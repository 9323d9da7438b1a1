//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de los formatos de texto que acepta el formulario.

use chrono::{NaiveDate, NaiveTime};

use crate::utils::errors::AppError;

/// Validar y convertir string a fecha (formato YYYY-MM-DD).
/// El parseo es estricto con el calendario: 2024-02-30 se rechaza.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!("Invalid date '{}'. Use YYYY-MM-DD.", trimmed))
    })
}

/// Validar y convertir string a hora. Acepta HH:MM:SS y, si no
/// coincide, HH:MM (mismo orden de intentos que el formulario original).
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| {
            AppError::BadRequest(format!("Invalid time '{}'. Use HH:MM or HH:MM:SS.", trimmed))
        })
}

/// Validar que un campo de texto requerido no esté vacío.
/// Devuelve el valor sin espacios alrededor.
pub fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed)
}

/// Validar que un entero sea positivo (asientos, capacidades)
pub fn require_positive(field: &str, value: i32) -> Result<i32, AppError> {
    if value <= 0 {
        return Err(AppError::BadRequest(format!(
            "{} must be a positive integer",
            field
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("Reference Day", "2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert!(parse_date("Reference Day", " 2024-01-15 ").is_ok());
    }

    #[test]
    fn test_parse_date_rejects_impossible_calendar_date() {
        // El 30 de febrero no existe
        assert!(parse_date("Reference Day", "2024-02-30").is_err());
        assert!(parse_date("Reference Day", "2023-02-29").is_err());
    }

    #[test]
    fn test_parse_date_accepts_leap_day() {
        assert!(parse_date("Reference Day", "2024-02-29").is_ok());
    }

    #[test]
    fn test_parse_date_rejects_wrong_format() {
        assert!(parse_date("Reference Day", "2024/01/15").is_err());
        assert!(parse_date("Reference Day", "15-01-2024").is_err());
        assert!(parse_date("Reference Day", "").is_err());
    }

    #[test]
    fn test_parse_time_both_formats() {
        let short = parse_time("Takeoff Time", "14:30").unwrap();
        let full = parse_time("Takeoff Time", "14:30:00").unwrap();
        assert_eq!(short, full);
        assert_eq!(
            parse_time("Takeoff Time", "14:30:45").unwrap(),
            NaiveTime::from_hms_opt(14, 30, 45).unwrap()
        );
    }

    #[test]
    fn test_parse_time_rejects_invalid() {
        assert!(parse_time("Takeoff Time", "25:00").is_err());
        assert!(parse_time("Takeoff Time", "14.30").is_err());
        assert!(parse_time("Takeoff Time", "").is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("City Name", "  Springfield ").unwrap(), "Springfield");
        assert!(require_text("City Name", "   ").is_err());
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("Number of Seats", 180).unwrap(), 180);
        assert!(require_positive("Number of Seats", 0).is_err());
        assert!(require_positive("Number of Seats", -3).is_err());
    }
}
