use std::sync::Arc;

use color_eyre::eyre::Result;
use dental_api::config::{ApiConfig, StoreKind};
use dental_core::repository::AppointmentRepository;
use dental_db::{
    create_pool, memory::InMemoryAppointmentRepository, repositories::PgAppointmentRepository,
    schema::initialize_database,
};
use dotenv::dotenv;
use eyre::eyre;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize logging
    dental_api::init_tracing(config.log_level)?;

    let repository: Arc<dyn AppointmentRepository> = match config.store {
        StoreKind::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| eyre!("DATABASE_URL must be set for the postgres store"))?;

            // Create database connection pool
            let db_pool = create_pool(database_url).await?;

            // Initialize database schema
            initialize_database(&db_pool).await?;

            info!("Using PostgreSQL appointment store");
            Arc::new(PgAppointmentRepository::new(db_pool))
        }
        StoreKind::Memory => {
            warn!("Using in-memory appointment store; data is lost on exit");
            Arc::new(InMemoryAppointmentRepository::new())
        }
    };

    // Start API server
    dental_api::start_server(config, repository).await?;

    Ok(())
}
