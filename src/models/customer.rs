//! Modelo de Customer
//!
//! Mapea exactamente a la tabla Customer. El CustomerID lo asigna el
//! usuario (documento de identidad), no es auto-incremental.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    #[sqlx(rename = "CustomerID")]
    pub customer_id: String,
    #[sqlx(rename = "fname")]
    pub first_name: String,
    #[sqlx(rename = "lname")]
    pub last_name: String,
    pub address: String,
    pub email: String,
    #[sqlx(rename = "phoneNumber")]
    pub phone_number: String,
}
