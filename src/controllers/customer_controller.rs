use sqlx::MySqlPool;
use tracing::info;
use validator::Validate;

use crate::dto::city_dto::ApiResponse;
use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse};
use crate::models::customer::Customer;
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::require_text;

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    /// Registrar un cliente. Un CustomerID o email repetido sale como
    /// Conflict desde la clave única.
    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, AppError> {
        request.validate()?;
        let customer_id = require_text("Customer ID", &request.customer_id)?;

        let customer = Customer {
            customer_id: customer_id.to_string(),
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            address: request.address.trim().to_string(),
            email: request.email.trim().to_string(),
            phone_number: request.phone_number.trim().to_string(),
        };

        self.repository.create(&customer).await?;
        info!("✅ Customer registered with ID: {}", customer.customer_id);

        let message = format!("Customer registered with ID {}", customer.customer_id);
        Ok(ApiResponse::success_with_message(customer.into(), message))
    }

    pub async fn get_by_id(&self, customer_id: &str) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| not_found_error("Customer", customer_id))?;

        Ok(customer.into())
    }

    pub async fn list(&self) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.repository.list_all().await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    /// Pasajeros con reserva en un vuelo operacional
    pub async fn list_by_flight(&self, flight_id: i32) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.repository.list_by_flight(flight_id).await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }
}
