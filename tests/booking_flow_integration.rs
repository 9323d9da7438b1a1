//! Tests de integración del flujo de reservas.
//!
//! Ejercitan el contrato con los triggers de asientos del schema real:
//! insertar una reserva incrementa seats_booked, cancelarla lo libera
//! y el trigger rechaza cualquier transición que deje la plantilla
//! sobrevendida.
//!
//! Requieren una base MySQL con el schema de la agencia (incluidos los
//! triggers de Booking) accesible vía TEST_DATABASE_URL. Sin esa
//! variable, cada test se salta en silencio.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{NaiveDate, NaiveTime};
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use travel_booking::dto::booking_dto::CreateBookingRequest;
use travel_booking::models::booking::BookingState;
use travel_booking::models::customer::Customer;
use travel_booking::models::flight::FlightState;
use travel_booking::repositories::airline_repository::AirlineRepository;
use travel_booking::repositories::airport_repository::AirportRepository;
use travel_booking::repositories::booking_repository::BookingRepository;
use travel_booking::repositories::city_repository::CityRepository;
use travel_booking::repositories::customer_repository::CustomerRepository;
use travel_booking::repositories::flight_repository::FlightRepository;
use travel_booking::repositories::general_flight_repository::GeneralFlightRepository;
use travel_booking::services::booking_service::BookingService;
use travel_booking::services::display_service::DisplayService;
use travel_booking::utils::errors::AppError;

async fn test_pool() -> Option<MySqlPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    MySqlPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .ok()
}

fn unique() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct Fixture {
    flight_id: i32,
    general_flight_id: i32,
    dep_city_name: String,
}

/// Armar ciudad, aeropuertos, aerolínea, plantilla y vuelo para un test
async fn seed_flight(pool: &MySqlPool, seats: i32) -> Fixture {
    let suffix = unique();
    let cities = CityRepository::new(pool.clone());
    let airports = AirportRepository::new(pool.clone());

    let dep_city_name = format!("Dep City {}", suffix);
    let dep_city = cities.create(&dep_city_name).await.unwrap();
    let arr_city = cities.create(&format!("Arr City {}", suffix)).await.unwrap();

    let dep_airport = airports
        .create(&format!("Dep Airport {}", suffix), dep_city)
        .await
        .unwrap();
    let arr_airport = airports
        .create(&format!("Arr Airport {}", suffix), arr_city)
        .await
        .unwrap();

    let airline = AirlineRepository::new(pool.clone())
        .create(&format!("Airline {}", suffix))
        .await
        .unwrap();

    let general_flight_id = GeneralFlightRepository::new(pool.clone())
        .create(
            time(8, 0),
            time(11, 30),
            date(2030, 6, 1),
            dep_airport,
            arr_airport,
            airline,
            seats,
        )
        .await
        .unwrap();

    let flight_id = FlightRepository::new(pool.clone())
        .create(
            date(2030, 6, 1),
            date(2030, 6, 1),
            FlightState::Scheduled,
            general_flight_id,
            None,
        )
        .await
        .unwrap();

    Fixture {
        flight_id,
        general_flight_id,
        dep_city_name,
    }
}

async fn seed_customer(pool: &MySqlPool) -> String {
    let customer_id = format!("C{}", unique() % 10_000_000_000_000);
    let customer = Customer {
        customer_id: customer_id.clone(),
        first_name: "Test".to_string(),
        last_name: "Passenger".to_string(),
        address: "1 Test Street".to_string(),
        email: format!("passenger{}@example.com", unique()),
        phone_number: "600000000".to_string(),
    };
    CustomerRepository::new(pool.clone())
        .create(&customer)
        .await
        .unwrap();
    customer_id
}

async fn seats_booked(pool: &MySqlPool, general_flight_id: i32) -> i32 {
    GeneralFlightRepository::new(pool.clone())
        .find_by_id(general_flight_id)
        .await
        .unwrap()
        .unwrap()
        .seats_booked
}

async fn book(pool: &MySqlPool, customer_id: &str, flight_id: i32) -> Result<i32, AppError> {
    let service = BookingService::new(pool.clone());
    let response = service
        .create_booking(CreateBookingRequest {
            customer_id: customer_id.to_string(),
            flight_id,
            state: Some(BookingState::Confirmed),
        })
        .await?;
    Ok(response.data.unwrap().booking_number)
}

#[tokio::test]
async fn test_booking_increments_seats_booked() {
    let Some(pool) = test_pool().await else { return };

    let fixture = seed_flight(&pool, 2).await;
    let customer_id = seed_customer(&pool).await;
    assert_eq!(seats_booked(&pool, fixture.general_flight_id).await, 0);

    let booking_number = book(&pool, &customer_id, fixture.flight_id).await.unwrap();
    assert!(booking_number > 0);

    assert_eq!(seats_booked(&pool, fixture.general_flight_id).await, 1);
}

#[tokio::test]
async fn test_trigger_rejects_insert_on_full_schedule() {
    let Some(pool) = test_pool().await else { return };

    let fixture = seed_flight(&pool, 1).await;
    let first = seed_customer(&pool).await;
    let second = seed_customer(&pool).await;

    book(&pool, &first, fixture.flight_id).await.unwrap();

    // Directo contra el repositorio, sin la comprobación previa del
    // servicio: el rechazo viene del trigger de inserción
    let result = BookingRepository::new(pool.clone())
        .create(
            BookingState::Confirmed,
            &second,
            fixture.flight_id,
            fixture.general_flight_id,
            chrono::Utc::now().naive_utc(),
        )
        .await;

    assert!(matches!(result, Err(AppError::CapacityExceeded(_))));
    assert_eq!(seats_booked(&pool, fixture.general_flight_id).await, 1);
}

#[tokio::test]
async fn test_service_rejects_booking_on_full_snapshot() {
    let Some(pool) = test_pool().await else { return };

    let fixture = seed_flight(&pool, 1).await;
    let first = seed_customer(&pool).await;
    let second = seed_customer(&pool).await;

    book(&pool, &first, fixture.flight_id).await.unwrap();

    let result = book(&pool, &second, fixture.flight_id).await;
    assert!(matches!(result, Err(AppError::CapacityExceeded(_))));
    assert_eq!(seats_booked(&pool, fixture.general_flight_id).await, 1);
}

#[tokio::test]
async fn test_cancel_and_reactivate_roundtrip() {
    let Some(pool) = test_pool().await else { return };

    let fixture = seed_flight(&pool, 1).await;
    let first = seed_customer(&pool).await;
    let second = seed_customer(&pool).await;
    let service = BookingService::new(pool.clone());

    let booking_number = book(&pool, &first, fixture.flight_id).await.unwrap();
    assert_eq!(seats_booked(&pool, fixture.general_flight_id).await, 1);

    // Cancelar libera el asiento
    service
        .update_booking_state(booking_number, BookingState::Cancelled)
        .await
        .unwrap();
    assert_eq!(seats_booked(&pool, fixture.general_flight_id).await, 0);

    // Reactivar con asiento disponible vuelve al contador previo
    service
        .update_booking_state(booking_number, BookingState::Confirmed)
        .await
        .unwrap();
    assert_eq!(seats_booked(&pool, fixture.general_flight_id).await, 1);

    // Cancelar de nuevo y dejar que otro cliente consuma el asiento
    service
        .update_booking_state(booking_number, BookingState::Cancelled)
        .await
        .unwrap();
    book(&pool, &second, fixture.flight_id).await.unwrap();

    // La reactivación ahora choca con el trigger
    let result = service
        .update_booking_state(booking_number, BookingState::Confirmed)
        .await;
    assert!(matches!(result, Err(AppError::CapacityExceeded(_))));
    assert_eq!(seats_booked(&pool, fixture.general_flight_id).await, 1);
}

#[tokio::test]
async fn test_display_fallback_for_missing_rows() {
    let Some(pool) = test_pool().await else { return };

    // IDs que no existen en el schema: la resolución degrada al
    // placeholder "Entidad:ID" sin devolver error
    let display = DisplayService::new(pool.clone());
    assert_eq!(display.city_name(-12345).await, "City:-12345");
    assert_eq!(display.airline_name(-12345).await, "Airline:-12345");
    assert_eq!(display.city_name_of_airport(-12345).await, "Airport:-12345");
}

#[tokio::test]
async fn test_city_roundtrip_by_name() {
    let Some(pool) = test_pool().await else { return };

    let cities = CityRepository::new(pool.clone());
    let name = format!("Springfield {}", unique());

    let city_id = cities.create(&name).await.unwrap();
    assert!(city_id > 0);

    let all = cities.list_all().await.unwrap();
    let matching: Vec<_> = all.iter().filter(|c| c.city_name == name).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].city_id, city_id);
}

#[tokio::test]
async fn test_schedule_search_partial_case_insensitive_ordered() {
    let Some(pool) = test_pool().await else { return };

    let fixture = seed_flight(&pool, 10).await;
    let schedules = GeneralFlightRepository::new(pool.clone());

    // Segunda plantilla en el mismo par de ciudades, un día antes
    let existing = schedules
        .find_by_id(fixture.general_flight_id)
        .await
        .unwrap()
        .unwrap();
    schedules
        .create(
            time(9, 15),
            time(12, 0),
            date(2030, 5, 30),
            existing.dep_airport_id,
            existing.arr_airport_id,
            existing.airline_id,
            10,
        )
        .await
        .unwrap();

    // Match parcial en minúsculas contra "Dep City <n>" / "Arr City <n>"
    let partial_dep = fixture.dep_city_name.to_lowercase().replace("dep ", "");
    let results = schedules
        .search_by_cities(&partial_dep, "arr city")
        .await
        .unwrap();

    let days: Vec<_> = results
        .iter()
        .filter(|r| r.dep_airport_name.contains(&fixture.dep_city_name["Dep City ".len()..]))
        .map(|r| r.f_day)
        .collect();
    assert_eq!(days.len(), 2);
    assert!(days[0] <= days[1], "ascending by reference day");
}

#[tokio::test]
async fn test_airlines_in_city_descending_by_name() {
    let Some(pool) = test_pool().await else { return };

    let suffix = unique();
    let cities = CityRepository::new(pool.clone());
    let airports = AirportRepository::new(pool.clone());
    let airlines = AirlineRepository::new(pool.clone());
    let schedules = GeneralFlightRepository::new(pool.clone());

    let city_name = format!("Hub City {}", suffix);
    let city_id = cities.create(&city_name).await.unwrap();
    let dep_airport = airports
        .create(&format!("Hub Airport {}", suffix), city_id)
        .await
        .unwrap();
    let arr_city = cities.create(&format!("Spoke City {}", suffix)).await.unwrap();
    let arr_airport = airports
        .create(&format!("Spoke Airport {}", suffix), arr_city)
        .await
        .unwrap();

    let alpha = format!("Alpha Air {}", suffix);
    let zulu = format!("Zulu Air {}", suffix);
    let alpha_id = airlines.create(&alpha).await.unwrap();
    let zulu_id = airlines.create(&zulu).await.unwrap();

    for airline_id in [alpha_id, zulu_id] {
        schedules
            .create(
                time(7, 0),
                time(9, 0),
                date(2030, 7, 1),
                dep_airport,
                arr_airport,
                airline_id,
                50,
            )
            .await
            .unwrap();
    }

    let result = airlines.list_in_city(&city_name).await.unwrap();
    let names: Vec<_> = result.iter().map(|a| a.airline_name.clone()).collect();
    assert_eq!(names, vec![zulu, alpha], "descending by airline name");
}
