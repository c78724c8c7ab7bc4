use std::sync::Arc;

use kennel_persistence::{PersistenceService, SqlPersistService, schema::create_tables};
use kennel_server::{
    model::{AppState, Configuration},
    startup::{self, GracefulShutdown},
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize configuration and logging
    let configuration = Configuration::new()?;

    let logging_config = configuration.logging_config();
    let _logging_guard = startup::init_logging(&logging_config)?;

    // Connect to the database and prepare tables
    let database_connection = configuration.database_connection().await?;
    if configuration.auto_create_schema() {
        create_tables(&database_connection).await?;
    }

    let persistence: Arc<dyn PersistenceService> =
        Arc::new(SqlPersistService::new(database_connection));
    info!("Using {} persistence", persistence.backend_name());

    // Extract configuration parameters
    let server_address = configuration.server_address();
    let server_port = configuration.server_port();
    let context_path = configuration.server_context_path();
    let workers = configuration.server_workers();
    let shutdown_timeout = configuration.shutdown_timeout();

    let app_state = Arc::new(AppState::new(configuration, persistence));

    let shutdown_signal = startup::wait_for_shutdown_signal().await;
    let graceful_shutdown = GracefulShutdown::new(shutdown_signal, shutdown_timeout);

    info!(
        "Starting Kennel server on {}:{}{}",
        server_address, server_port, context_path
    );
    let server = startup::api_server(
        app_state,
        context_path,
        server_address,
        server_port,
        workers,
        shutdown_timeout,
    )?;
    let server_handle = server.handle();

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("HTTP server error: {}", e);
            }
        }
        _ = graceful_shutdown.wait_for_shutdown(server_handle) => {
            info!("HTTP server shutting down gracefully");
        }
    }

    info!("Kennel server stopped");

    Ok(())
}
