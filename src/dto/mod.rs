//! DTOs de la API
//!
//! Requests y responses por entidad. Los requests llevan las
//! validaciones declarativas; las fechas y horas viajan como texto y
//! se convierten en los controladores.

pub mod aircraft_dto;
pub mod airline_dto;
pub mod airport_dto;
pub mod booking_dto;
pub mod city_dto;
pub mod customer_dto;
pub mod flight_dto;
pub mod general_flight_dto;
