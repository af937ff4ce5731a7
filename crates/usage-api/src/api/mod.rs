//! HTTP API for usage reporting.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{cors_layer, logging_middleware};
pub use types::*;

use crate::usage::{UsageAggregator, UsageSource};
use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Usage aggregation over the upstream sources
    pub aggregator: Arc<UsageAggregator>,
}

impl AppState {
    /// Create new application state.
    pub fn new(source: Arc<dyn UsageSource>, max_concurrent_lookups: usize) -> Self {
        Self {
            aggregator: Arc::new(UsageAggregator::new(source, max_concurrent_lookups)),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/usage", get(handlers::get_usage))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
