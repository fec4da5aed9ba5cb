use std::any::Any;

use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::ApiError;
use crate::config::ServerConfig;
use crate::endpoint::endpoints;
use crate::handler::{self, DiffLimits};

/// Build the axum router with all devkit endpoints.
pub fn build_router(config: &ServerConfig) -> Router {
    let router = Router::new()
        .route(endpoints::DIFF_CHECKER, post(handler::diff_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .with_state(DiffLimits::from(config))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// A panicking handler still answers with the generic JSON error.
fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal("handler panicked".into()).into_response()
}
