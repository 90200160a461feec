pub mod api;
pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};

use api::{create_router, AppState};
use modules::access::SharedSecretAuthorizer;
use modules::catalog::{application::seed_catalog, application::SeedReport, build_service};
use shared::errors::{AppError, AppResult};
use shared::{Config, Database};

/// Connect, migrate, and serve the HTTP API until a shutdown signal arrives.
pub async fn serve(config: Config) -> AppResult<()> {
    let db = connect(&config)?;
    db.run_migrations()?;

    let state = AppState::new(
        build_service(Arc::clone(&db)),
        SharedSecretAuthorizer::new(config.api_secret.clone()),
    );
    let app = create_router(state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::ConfigError(format!("Failed to bind {}: {}", address, e)))?;
    log_info!("Server running on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    log_info!("Server shut down");
    Ok(())
}

/// Apply pending migrations and exit.
pub fn migrate(config: &Config) -> AppResult<usize> {
    connect(config)?.run_migrations()
}

/// Migrate, then insert the demonstration catalog.
pub async fn seed(config: &Config) -> AppResult<SeedReport> {
    let db = connect(config)?;
    db.run_migrations()?;
    seed_catalog(&build_service(db)).await
}

fn connect(config: &Config) -> AppResult<Arc<Database>> {
    let db = Database::new(&config.database_url, config.max_connections)?;
    Ok(Arc::new(db))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            log_error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        log_info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                log_info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log_error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
