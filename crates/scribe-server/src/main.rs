//! # Scribe Server
//!
//! Entry point for the Scribe blog backend: loads configuration, installs
//! tracing and metrics, wires the store and cache, and serves the REST API
//! until Ctrl+C or SIGTERM.

use scribe_config::ConfigLoader;
use scribe_core::{telemetry::init_telemetry, ScribeError, ScribeResult};
use scribe_rest::create_router;
use scribe_server::{di::AppContainer, exporter, startup};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> ScribeResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_telemetry(&config.observability.telemetry())?;
    startup::print_banner();
    info!("Starting Scribe server {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    let container = AppContainer::build(&config).await?;
    let mut router = create_router(
        container.app_state(config.pagination.page_size),
        &config.server,
    );

    if config.observability.metrics_enabled {
        let handle = exporter::install_recorder()?;
        router = router.merge(exporter::metrics_router(
            &config.observability.metrics_path,
            handle,
        ));
    }

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ScribeError::Internal(format!("Failed to bind {}: {}", addr, e)))?;
    startup::print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ScribeError::Internal(format!("REST server error: {}", e)))?;

    container.shutdown().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
