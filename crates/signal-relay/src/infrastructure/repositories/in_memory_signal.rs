use crate::application::ports::SignalStore;
use crate::domain::Signal;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory holder for the latest signal
///
/// A single `RwLock` serializes publish, read and clear. Guards never
/// outlive the call that took them.
pub struct InMemorySignalStore {
    latest: Arc<RwLock<Option<Signal>>>,
}

impl InMemorySignalStore {
    pub fn new() -> Self {
        InMemorySignalStore {
            latest: Arc::new(RwLock::new(None)),
        }
    }

    /// Create holding `signal` (for testing)
    pub fn with_signal(signal: Signal) -> Self {
        InMemorySignalStore {
            latest: Arc::new(RwLock::new(Some(signal))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.latest.read().is_none()
    }

    /// Get the current signal (sync)
    pub fn snapshot(&self) -> Option<Signal> {
        self.latest.read().clone()
    }
}

impl Default for InMemorySignalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemorySignalStore {
    fn clone(&self) -> Self {
        InMemorySignalStore {
            latest: Arc::clone(&self.latest),
        }
    }
}

#[async_trait]
impl SignalStore for InMemorySignalStore {
    async fn publish(&self, signal: Signal) {
        *self.latest.write() = Some(signal);
    }

    async fn read(&self) -> Option<Signal> {
        self.snapshot()
    }

    async fn clear(&self) {
        self.latest.write().take();
    }
}
