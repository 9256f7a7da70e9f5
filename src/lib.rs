use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::{any, get},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod image;
pub mod models;
pub mod routes;

use config::Config;

/// Shared, read-only request state. No connection is held between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState { config: Arc::new(config) }
    }
}

pub fn app(state: AppState) -> Router {
    let upload_limit = state.config.upload_limit_bytes;
    let record_limit = state.config.record_body_limit();

    Router::new()
        .route("/", get(|| async { concat!("League API - v", env!("CARGO_PKG_VERSION")) }))
        .route("/health", get(routes::health::health_check))

        // League data: teams, matches, socials, champions, rules
        .route(
            "/api",
            any(routes::league::handle).layer(DefaultBodyLimit::max(record_limit)),
        )

        // Image upload
        .route(
            "/upload",
            any(routes::upload::upload_image).layer(DefaultBodyLimit::max(upload_limit)),
        )

        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
