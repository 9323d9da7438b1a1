//! Acceso a registros
//!
//! Un repositorio por entidad. Cada uno encapsula las queries
//! parametrizadas contra su tabla y mapea los errores de MySQL al
//! taxón de AppError correspondiente.

pub mod aircraft_repository;
pub mod airline_repository;
pub mod airport_repository;
pub mod booking_repository;
pub mod city_repository;
pub mod customer_repository;
pub mod flight_repository;
pub mod general_flight_repository;
