//! In-house service pricing engine.
//!
//! The [`pricing`] module holds the quote formula; [`routes`] and
//! [`pricing::routes`] expose it over HTTP.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::quote::page))
        .route("/health", get(health))
        .nest("/api/pricing", pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
