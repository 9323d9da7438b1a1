//! Services module
//!
//! Este módulo contiene la lógica que cruza varias entidades: el flujo
//! de reservas y la resolución de nombres para mostrar.

pub mod booking_service;
pub mod display_service;
