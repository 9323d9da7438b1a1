use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dotenvy::dotenv;
use travel_booking::config::environment::EnvironmentConfig;
use travel_booking::database::create_pool;
use travel_booking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("✈️  Travel Agency - Flight & Booking Records");
    info!("============================================");

    // Inicializar base de datos (conexión perezosa, un solo handle)
    let pool = match create_pool(None) {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error configurando la base de datos: {}", e);
            return Err(e);
        }
    };

    let config = EnvironmentConfig::from_env();
    if config.is_development() {
        info!("🔧 Modo desarrollo (CORS permisivo)");
    }
    let addr: SocketAddr = config.server_addr().parse()?;

    let app_state = AppState::new(pool, config);
    let app = travel_booking::build_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏙  Ciudades:");
    info!("   POST /api/city - Registrar ciudad");
    info!("   GET  /api/city - Listar ciudades");
    info!("   GET  /api/city/:id - Obtener ciudad");
    info!("   PUT  /api/city/:id - Renombrar ciudad");
    info!("🛫 Aeropuertos, aerolíneas y aviones:");
    info!("   POST /api/airport | /api/airline | /api/aircraft - Registrar");
    info!("   GET  /api/airport | /api/airline | /api/aircraft - Listar");
    info!("   GET  /api/airline/in-city?city= - Aerolíneas que operan en una ciudad");
    info!("👤 Clientes:");
    info!("   POST /api/customer - Registrar cliente");
    info!("   GET  /api/customer - Listar clientes");
    info!("   GET  /api/customer/on-flight/:flight_id - Pasajeros de un vuelo");
    info!("📅 Plantillas de vuelo:");
    info!("   POST /api/schedule - Crear plantilla");
    info!("   GET  /api/schedule/search?departure_city=&arrival_city= - Buscar por ciudades");
    info!("🛩  Vuelos operacionales:");
    info!("   POST /api/flight - Crear vuelo");
    info!("   GET  /api/flight/search?departure_city=&start_date=&end_date= - Buscar por período");
    info!("   PUT  /api/flight/:id - Reprogramar vuelo");
    info!("🎫 Reservas:");
    info!("   POST /api/booking - Crear reserva");
    info!("   GET  /api/booking/bookable-flights - Vuelos con asientos libres");
    info!("   GET  /api/booking/:number - Obtener reserva");
    info!("   GET  /api/booking/:number/details - Detalle completo");
    info!("   PUT  /api/booking/:number/state - Cambiar estado");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
