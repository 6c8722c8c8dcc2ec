use crate::domain::value_objects::{Action, SignalPrice};
use serde::Serialize;

/// Canonical trading signal derived from one inbound alert.
///
/// Built once by the normalizer and never mutated afterwards; the store
/// replaces whole values. Optional fields are omitted from JSON rather than
/// written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    symbol: String,
    action: Action,
    time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    lot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<SignalPrice>,
}

impl Signal {
    pub fn new(symbol: impl Into<String>, action: Action, time: impl Into<String>) -> Self {
        Signal {
            symbol: symbol.into(),
            action,
            time: time.into(),
            lot: None,
            price: None,
        }
    }

    /// Non-finite lots are dropped; they have no JSON representation.
    pub fn with_lot(mut self, lot: f64) -> Self {
        self.lot = lot.is_finite().then_some(lot);
        self
    }

    pub fn with_price(mut self, price: SignalPrice) -> Self {
        self.price = match price {
            SignalPrice::Number(n) if !n.is_finite() => None,
            other => Some(other),
        };
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn lot(&self) -> Option<f64> {
        self.lot
    }

    pub fn price(&self) -> Option<&SignalPrice> {
        self.price.as_ref()
    }
}
