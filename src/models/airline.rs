use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Airline {
    #[sqlx(rename = "AirlineID")]
    pub airline_id: i32,
    #[sqlx(rename = "AirlineName")]
    pub airline_name: String,
}
