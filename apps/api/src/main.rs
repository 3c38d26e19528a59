use agrichain_api::api::{create_router, Repositories};
use agrichain_api::config::{AppConfig, StorageBackend};
use agrichain_api::domain::{Certification, Collection, Product};
use agrichain_api::infrastructure::database;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(backend = %config.storage, "Initializing storage");
    let repos = match config.storage {
        StorageBackend::Memory => Repositories::in_memory(),
        StorageBackend::Postgres => {
            let pool = match database::connect_lazy(&config.database_url, config.max_connections) {
                Ok(pool) => pool,
                Err(e) => {
                    tracing::error!(error = %e, "Invalid DATABASE_URL");
                    std::process::exit(1);
                }
            };

            // Unreachable database is not fatal; requests fail with 500 until it is up
            match database::ensure_collections(&pool, &[Product::NAME, Certification::NAME]).await {
                Ok(()) => tracing::info!("Database connected successfully"),
                Err(e) => tracing::error!(error = %e, "Database bootstrap failed"),
            }

            Repositories::postgres(pool)
        }
    };

    let app = create_router(repos);

    // Start server
    let addr = config.listen_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received");
}
