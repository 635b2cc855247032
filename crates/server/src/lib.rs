//! Clockwork Server - HTTP endpoint layer
//!
//! Serves the clock page and the two JSON time endpoints. The server is
//! assembled from an explicit [`ServerConfig`]; there is no global state.

pub mod config;
pub mod error;
pub mod handlers;
pub mod page;
pub mod state;

use std::any::Any;
use std::future::Future;

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use state::AppState;

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/time", get(handlers::time))
        .route("/worldclock", get(handlers::worldclock))
        .route("/timezones", get(handlers::timezones))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}

/// Turns a handler panic into a logged 500 with the usual error body.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("handler panicked");
    ApiError::Internal(detail.to_string()).into_response()
}

/// Serves `state` on an already-bound listener until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the listener fails.
pub async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "clock server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("clock server stopped");
    Ok(())
}

/// Binds according to `config` and serves until Ctrl-C.
///
/// # Errors
/// Returns an error if the display timezone is invalid or binding fails.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState::from_config(&config)?;
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    serve(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
