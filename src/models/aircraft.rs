use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Aircraft {
    #[sqlx(rename = "AircraftID")]
    pub aircraft_id: i32,
    #[sqlx(rename = "AircraftName")]
    pub aircraft_name: String,
}
