use chrono::NaiveDateTime;
use sqlx::MySqlPool;

use crate::models::booking::{Booking, BookingState};
use crate::models::booking_detail::BookingDetail;
use crate::utils::errors::{classify_db_error, AppError};

pub struct BookingRepository {
    pool: MySqlPool,
}

impl BookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insertar una reserva. El incremento de seats_booked lo hace el
    /// trigger de inserción; si la plantilla está llena, el trigger
    /// rechaza la fila y classify_db_error lo reporta como
    /// CapacityExceeded.
    pub async fn create(
        &self,
        state: BookingState,
        customer_id: &str,
        flight_id: i32,
        general_flight_id: i32,
        booking_date: NaiveDateTime,
    ) -> Result<i32, AppError> {
        let result = sqlx::query(
            "INSERT INTO Booking (state, CustomerID, FlightID, GeneralFlightID, BookingDate) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(state)
        .bind(customer_id)
        .bind(flight_id)
        .bind(general_flight_id)
        .bind(booking_date)
        .execute(&self.pool)
        .await
        .map_err(|e| classify_db_error("adding booking", e))?;

        Ok(result.last_insert_id() as i32)
    }

    pub async fn find_by_number(&self, booking_number: i32) -> Result<Option<Booking>, AppError> {
        let result =
            sqlx::query_as::<_, Booking>("SELECT * FROM Booking WHERE BookingNumber = ?")
                .bind(booking_number)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| classify_db_error("finding booking", e))?;

        Ok(result)
    }

    /// Cambiar el estado de una reserva. Los ajustes de asientos los
    /// hace el trigger de actualización; reactivar contra una plantilla
    /// llena sale como CapacityExceeded.
    pub async fn update_state(
        &self,
        booking_number: i32,
        new_state: BookingState,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE Booking SET state = ? WHERE BookingNumber = ?")
            .bind(new_state)
            .bind(booking_number)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_db_error("updating booking state", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Detalle completo de una reserva en un único SELECT multi-join,
    /// con el mismo conjunto de campos y alias que devuelve el
    /// procedimiento SP_GetBookingDetails del schema.
    pub async fn find_details(
        &self,
        booking_number: i32,
    ) -> Result<Option<BookingDetail>, AppError> {
        let result = sqlx::query_as::<_, BookingDetail>(
            r#"
            SELECT b.BookingNumber, b.state AS BookingState, b.BookingDate,
                   c.CustomerID, c.fname AS CustomerFirstName, c.lname AS CustomerLastName,
                   c.email AS CustomerEmail, c.address AS CustomerAddress,
                   c.phoneNumber AS CustomerPhone,
                   fl.FlightID, fl.TakeOffDate AS FlightTakeOffDate,
                   fl.ArrivalDate AS FlightArrivalDate, fl.State AS FlightState,
                   gf.GeneralFlightID,
                   gf.TakeoffTime AS GeneralFlightScheduledDeparture,
                   gf.ArrivalTime AS GeneralFlightScheduledArrival,
                   gf.NumberSeats, gf.seats_booked,
                   dep_ap.AirportName AS DepartureAirport,
                   dep_city.CityName AS DepartureCity,
                   arr_ap.AirportName AS ArrivalAirport,
                   arr_city.CityName AS ArrivalCity,
                   al.AirlineName, ac.AircraftName
            FROM Booking b
            JOIN Customer c ON b.CustomerID = c.CustomerID
            JOIN Flight fl ON b.FlightID = fl.FlightID
            JOIN GeneralFlight gf ON fl.GeneralFlightID = gf.GeneralFlightID
            JOIN Airport dep_ap ON gf.DepAirport = dep_ap.AirportID
            JOIN City dep_city ON dep_ap.CityID = dep_city.CityID
            JOIN Airport arr_ap ON gf.ArrAirport = arr_ap.AirportID
            JOIN City arr_city ON arr_ap.CityID = arr_city.CityID
            JOIN Airline al ON gf.AirlineID = al.AirlineID
            LEFT JOIN Aircraft ac ON fl.AircraftID = ac.AircraftID
            WHERE b.BookingNumber = ?
            "#,
        )
        .bind(booking_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify_db_error("retrieving booking details", e))?;

        Ok(result)
    }
}
