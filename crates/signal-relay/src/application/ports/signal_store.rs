use crate::domain::Signal;
use async_trait::async_trait;

/// Holder of the most recent accepted signal
///
/// Exactly one signal is retained at a time. Publishing overwrites it and
/// clearing removes it; there is no history. Implementations must serialize
/// all three operations so readers never see a partially written signal.
#[async_trait]
pub trait SignalStore: Send + Sync {
    /// Replace the current signal (last writer wins)
    async fn publish(&self, signal: Signal);

    /// Snapshot of the current signal, if any
    async fn read(&self) -> Option<Signal>;

    /// Drop the current signal; no-op when already empty
    async fn clear(&self);
}
