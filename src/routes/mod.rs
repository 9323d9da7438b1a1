pub mod aircraft_routes;
pub mod airline_routes;
pub mod airport_routes;
pub mod booking_routes;
pub mod city_routes;
pub mod customer_routes;
pub mod flight_routes;
pub mod general_flight_routes;
