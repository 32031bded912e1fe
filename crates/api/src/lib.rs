//! Demo HTTP API with a health check and an echo endpoint.
//!
//! Structured logging goes through `tracing`; request counters are recorded
//! with `metrics` and scraped from a separate Prometheus listener.

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use error::ServerError;

/// Creates the Axum application router with all routes.
pub fn create_app() -> Router {
    Router::new()
        .route("/health", get(routes::health::check))
        .route("/echo/{msg}", get(routes::echo::echo))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Resolves `config.metrics_addr()` to the first socket address it names.
pub async fn resolve_metrics_addr(config: &Config) -> Result<SocketAddr, ServerError> {
    let addr = config.metrics_addr();
    let resolve_error = |source| ServerError::Resolve {
        addr: addr.clone(),
        source,
    };

    tokio::net::lookup_host(&addr)
        .await
        .map_err(resolve_error)?
        .next()
        .ok_or_else(|| {
            resolve_error(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no socket addresses",
            ))
        })
}

/// Installs the Prometheus exporter with its own HTTP listener on the
/// resolved metrics address.
///
/// Must be called from within a tokio runtime.
pub async fn install_metrics(config: &Config) -> Result<SocketAddr, ServerError> {
    let addr = resolve_metrics_addr(config).await?;
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    tracing::info!(%addr, "metrics exporter listening");
    Ok(addr)
}

/// Binds `config.addr()` and serves the application until `shutdown` resolves.
pub async fn run<F>(config: &Config, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(%addr, "starting API server");

    serve(listener, shutdown).await
}

/// Serves the application on an already bound listener until `shutdown`
/// resolves, then waits for in-flight requests to finish.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server shut down gracefully");
    Ok(())
}
