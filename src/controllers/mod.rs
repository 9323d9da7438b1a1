//! Controladores
//!
//! Capa entre las rutas y los repositorios: validan la entrada,
//! llaman al repositorio o servicio y arman los DTOs de respuesta.

pub mod aircraft_controller;
pub mod airline_controller;
pub mod airport_controller;
pub mod booking_controller;
pub mod city_controller;
pub mod customer_controller;
pub mod flight_controller;
pub mod general_flight_controller;
