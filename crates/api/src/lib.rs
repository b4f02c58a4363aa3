//! # Dental Appointments API
//!
//! Web server for booking dental appointments: create, read, update and delete
//! appointments, and list them by date or by patient DNI.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into service calls
//! - **Services**: Business rules on top of the persistence gateway
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment and application configuration
//!
//! The API uses Axum as the web framework. Storage is reached only through the
//! `AppointmentRepository` trait, so any of the `dental-db` gateways can be
//! injected.

/// Configuration module for API settings
pub mod config;
/// Request handlers for the appointment endpoints
pub mod handlers;
/// Error handling shared by every handler
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Business logic between handlers and the persistence gateway
pub mod services;

use std::{sync::Arc, time::Duration};

use axum::Router;
use dental_core::repository::AppointmentRepository;
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use services::AppointmentService;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use dental_api::ApiState;
/// use dental_db::memory::InMemoryAppointmentRepository;
///
/// let state = Arc::new(ApiState::new(
///     Arc::new(InMemoryAppointmentRepository::new()),
///     "America/Lima",
/// ));
/// ```
pub struct ApiState {
    /// Appointment operations, backed by the injected gateway
    pub service: AppointmentService,

    /// Clinic time zone label, reported as-is
    pub clinic_timezone: String,
}

impl ApiState {
    pub fn new(
        repository: Arc<dyn AppointmentRepository>,
        clinic_timezone: impl Into<String>,
    ) -> Self {
        Self {
            service: AppointmentService::new(repository),
            clinic_timezone: clinic_timezone.into(),
        }
    }
}

/// Filter admitting events at `level` and above from every target
pub fn log_filter(level: Level) -> EnvFilter {
    EnvFilter::new(level.as_str().to_ascii_lowercase())
}

/// Installs the global tracing subscriber at the given maximum level
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(level))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the application router with every route and middleware layer attached
///
/// Cross-origin requests are allowed from any origin.
pub fn build_router(state: Arc<ApiState>, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Appointment endpoints
        .merge(routes::appointment::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(cors),
        )
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and gateway
///
/// Runs until the process receives Ctrl-C.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use std::sync::Arc;
/// use dental_api::{config::ApiConfig, start_server};
/// use dental_db::memory::InMemoryAppointmentRepository;
///
/// let config = ApiConfig::from_env()?;
/// start_server(config, Arc::new(InMemoryAppointmentRepository::new())).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    repository: Arc<dyn AppointmentRepository>,
) -> Result<()> {
    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(repository, config.clinic_timezone.clone()));

    let app = build_router(state, Duration::from_secs(config.request_timeout));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "Server listening on http://{} (clinic timezone {})",
        addr, config.clinic_timezone
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
