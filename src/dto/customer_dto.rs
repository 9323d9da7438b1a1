use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::customer::Customer;

// Request para registrar un cliente. El customer_id lo aporta el
// usuario (documento de identidad).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 20))]
    pub customer_id: String,

    #[validate(length(min = 1, max = 50))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50))]
    pub last_name: String,

    #[validate(length(min = 1, max = 200))]
    pub address: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 5, max = 20))]
    pub phone_number: String,
}

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone_number: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            address: customer.address,
            email: customer.email,
            phone_number: customer.phone_number,
        }
    }
}
