//! Signal Relay
//!
//! Receives TradingView alerts over HTTP, normalizes them into one canonical
//! [`Signal`] and keeps the most recent one for a downstream trading agent to
//! poll.
//!
//! # Architecture
//!
//! - **Domain**: `Signal`, `Action`, payload normalization and field coercion
//! - **Application**: the `SignalStore` port and the receive/latest use cases
//! - **Infrastructure**: in-memory store, clocks, configuration loading
//! - **Presentation**: REST handlers
//!
//! # Endpoints
//!
//! - `GET /` liveness text
//! - `POST /webhook` accept an alert (flat JSON or JSON inside `message`)
//! - `GET /signals` latest signal, or `{"status":"empty"}`
//! - `POST /clear` forget the latest signal
//!
//! # Example
//!
//! ```ignore
//! use signal_relay::{Relay, RelayConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let relay = Relay::new(RelayConfig::default());
//!     relay.run().await.unwrap();
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use domain::{
    Action, Clock, PayloadShape, Rejected, Signal, SignalNormalizer, SignalPrice, Timestamp,
};

pub use infrastructure::{
    ConfigError, FixedClock, InMemorySignalStore, LogFormat, RelayConfig, SystemClock,
};

pub use application::{LatestSignalUseCase, ReceiveSignalError, ReceiveSignalUseCase};

// Re-export port traits for integration tests
pub use application::ports::SignalStore;

pub use presentation::{AppState, create_router};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The relay server
pub struct Relay<C: Clock + 'static> {
    pub config: RelayConfig,
    pub clock: Arc<C>,
    pub signal_store: Arc<InMemorySignalStore>,
}

impl<C: Clock + 'static> Relay<C> {
    /// Create a relay with the given clock
    pub fn with_clock(config: RelayConfig, clock: Arc<C>) -> Self {
        Relay {
            config,
            clock,
            signal_store: Arc::new(InMemorySignalStore::new()),
        }
    }

    /// Create the REST API router
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState::new(
            Arc::clone(&self.clock),
            Arc::clone(&self.signal_store),
        ));

        create_router(state)
    }

    /// Run the relay server
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.bind_addr();
        let router = self.router();

        tracing::info!("{} listening on {}", self.config.name, addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

impl Relay<SystemClock> {
    /// Create a relay stamping signals with wall-clock time
    pub fn new(config: RelayConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }
}
