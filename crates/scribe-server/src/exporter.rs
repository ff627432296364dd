//! Prometheus exporter setup.

use axum::{routing::get, Router};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use scribe_core::{ScribeError, ScribeResult};
use tracing::info;

/// Installs the global Prometheus recorder and describes the cache counters.
pub fn install_recorder() -> ScribeResult<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ScribeError::Configuration(format!("Failed to install metrics recorder: {}", e)))?;
    scribe_service::metrics::register_metrics();
    info!("Prometheus recorder installed");
    Ok(handle)
}

/// Router serving the rendered metrics at `path`.
pub fn metrics_router(path: &str, handle: PrometheusHandle) -> Router {
    Router::new().route(
        path,
        get(move || {
            let handle = handle.clone();
            async move { handle.render() }
        }),
    )
}
