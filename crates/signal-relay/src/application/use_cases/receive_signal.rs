use crate::application::ports::SignalStore;
use crate::domain::{Clock, Rejected, Signal, SignalNormalizer};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReceiveSignalError {
    /// Body was missing or not JSON
    #[error("Invalid payload: body must be JSON")]
    InvalidPayload,

    #[error("Rejected payload: {0}")]
    Rejected(#[from] Rejected),
}

/// Normalize an inbound webhook body and publish it as the latest signal
pub struct ReceiveSignalUseCase<C, S>
where
    C: Clock,
    S: SignalStore,
{
    normalizer: SignalNormalizer<C>,
    store: Arc<S>,
}

impl<C, S> ReceiveSignalUseCase<C, S>
where
    C: Clock,
    S: SignalStore,
{
    pub fn new(normalizer: SignalNormalizer<C>, store: Arc<S>) -> Self {
        Self { normalizer, store }
    }

    /// `payload` is `None` when the transport could not decode the body.
    /// The store is only touched when a signal was produced.
    pub async fn execute(&self, payload: Option<Value>) -> Result<Signal, ReceiveSignalError> {
        let payload = payload.ok_or(ReceiveSignalError::InvalidPayload)?;
        tracing::debug!(%payload, "Webhook payload received");

        let signal = self.normalizer.normalize(&payload).inspect_err(|_| {
            tracing::warn!(%payload, "Rejected webhook payload: no valid action");
        })?;

        self.store.publish(signal.clone()).await;
        tracing::info!(
            symbol = signal.symbol(),
            action = %signal.action(),
            time = signal.time(),
            "Signal received"
        );

        Ok(signal)
    }
}
