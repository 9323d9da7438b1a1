use sqlx::MySqlPool;

use crate::models::customer::Customer;
use crate::utils::errors::{classify_db_error, AppError};

pub struct CustomerRepository {
    pool: MySqlPool,
}

impl CustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// El CustomerID lo aporta el usuario, no es auto-incremental.
    /// Un ID o email repetido sale como Conflict (clave única).
    pub async fn create(&self, customer: &Customer) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO Customer (CustomerID, fname, lname, address, email, phoneNumber) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&customer.customer_id)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.address)
        .bind(&customer.email)
        .bind(&customer.phone_number)
        .execute(&self.pool)
        .await
        .map_err(|e| classify_db_error("adding customer", e))?;

        Ok(())
    }

    pub async fn find_by_id(&self, customer_id: &str) -> Result<Option<Customer>, AppError> {
        let result = sqlx::query_as::<_, Customer>("SELECT * FROM Customer WHERE CustomerID = ?")
            .bind(customer_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_db_error("finding customer", e))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        let result =
            sqlx::query_as::<_, Customer>("SELECT * FROM Customer ORDER BY lname, fname")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| classify_db_error("listing customers", e))?;

        Ok(result)
    }

    /// Pasajeros con reserva en un vuelo operacional concreto
    pub async fn list_by_flight(&self, flight_id: i32) -> Result<Vec<Customer>, AppError> {
        let result = sqlx::query_as::<_, Customer>(
            r#"
            SELECT c.*
            FROM Customer c
            JOIN Booking b ON c.CustomerID = b.CustomerID
            WHERE b.FlightID = ?
            ORDER BY c.lname, c.fname
            "#,
        )
        .bind(flight_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify_db_error("listing customers by flight", e))?;

        Ok(result)
    }
}
