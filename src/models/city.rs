//! Modelo de City
//!
//! Mapea exactamente a la tabla City (CityID, CityName).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct City {
    #[sqlx(rename = "CityID")]
    pub city_id: i32,
    #[sqlx(rename = "CityName")]
    pub city_name: String,
}
