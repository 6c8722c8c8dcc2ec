use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::domain::{Clock, SignalNormalizer};
use crate::infrastructure::InMemorySignalStore;

/// Application state shared across handlers - uses concrete infrastructure types
pub struct AppState<C: Clock> {
    pub normalizer: SignalNormalizer<C>,
    pub signal_store: Arc<InMemorySignalStore>,
}

impl<C: Clock> AppState<C> {
    pub fn new(clock: Arc<C>, signal_store: Arc<InMemorySignalStore>) -> Self {
        AppState {
            normalizer: SignalNormalizer::new(clock),
            signal_store,
        }
    }
}

/// Create the REST API router
pub fn create_router<C: Clock + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        // Liveness
        .route("/", get(handlers::home))
        // Alert ingestion
        .route("/webhook", post(handlers::receive_webhook::<C>))
        // Consumer polling
        .route("/signals", get(handlers::latest_signal::<C>))
        .route("/clear", post(handlers::clear_signal::<C>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
