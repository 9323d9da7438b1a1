use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::booking::{Booking, BookingState};

// Request para crear una reserva. El GeneralFlightID no viene del
// cliente: se copia del vuelo seleccionado al momento de insertar.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub customer_id: String,
    pub flight_id: i32,
    pub state: Option<BookingState>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingStateRequest {
    pub state: BookingState,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_number: i32,
    pub state: BookingState,
    pub customer_id: String,
    pub flight_id: i32,
    pub general_flight_id: i32,
    pub booking_date: NaiveDateTime,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_number: booking.booking_number,
            state: booking.state,
            customer_id: booking.customer_id,
            flight_id: booking.flight_id,
            general_flight_id: booking.general_flight_id,
            booking_date: booking.booking_date,
        }
    }
}
