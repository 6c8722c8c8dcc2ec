use crate::application::ports::SignalStore;
use crate::domain::Signal;
use std::sync::Arc;

/// Read and reset access to the latest signal for polling consumers
pub struct LatestSignalUseCase<S: SignalStore> {
    store: Arc<S>,
}

impl<S: SignalStore> LatestSignalUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> Option<Signal> {
        self.store.read().await
    }

    pub async fn clear(&self) {
        self.store.clear().await;
        tracing::info!("Latest signal cleared");
    }
}
