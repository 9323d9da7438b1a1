//! Modelo de Airport
//!
//! Mapea exactamente a la tabla Airport. Cada aeropuerto pertenece
//! a una ciudad (CityID).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Airport {
    #[sqlx(rename = "AirportID")]
    pub airport_id: i32,
    #[sqlx(rename = "AirportName")]
    pub airport_name: String,
    #[sqlx(rename = "CityID")]
    pub city_id: i32,
}
