//! Alert payload normalization.
//!
//! TradingView can deliver an alert either as a JSON body or as JSON text
//! embedded in the templated `message` field. Both are accepted without the
//! sender saying which one it used: each [`PayloadShape`] is tried in
//! [`PayloadShape::RESOLUTION_ORDER`] and the first one that resolves a valid
//! action wins.

use crate::domain::entities::Signal;
use crate::domain::services::Clock;
use crate::domain::services::coercion::{
    coerce_action, coerce_number, coerce_price, coerce_text, first_present,
};
use crate::domain::value_objects::{Timestamp, format_signal_time};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

const ACTION_KEYS: &[&str] = &["action", "signal"];
const SYMBOL_KEYS: &[&str] = &["symbol", "sym"];
const MESSAGE_KEY: &str = "message";

/// No valid action could be resolved from either accepted shape
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no valid action could be resolved from the payload")]
pub struct Rejected;

/// Accepted wire shapes for an alert payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// Signal fields are top-level properties of the body
    Direct,
    /// Signal fields are JSON-encoded inside the `message` string
    NestedMessage,
}

impl PayloadShape {
    pub const RESOLUTION_ORDER: [PayloadShape; 2] =
        [PayloadShape::Direct, PayloadShape::NestedMessage];

    /// Attempt to build a signal from `raw` under this shape only
    pub fn resolve(&self, raw: &Value, now: Timestamp) -> Option<Signal> {
        match self {
            PayloadShape::Direct => resolve_direct(raw, now),
            PayloadShape::NestedMessage => resolve_nested(raw, now),
        }
    }
}

fn resolve_direct(raw: &Value, now: Timestamp) -> Option<Signal> {
    let fields = raw.as_object()?;

    // The action alone decides whether this shape matched.
    let action = first_present(fields, ACTION_KEYS).and_then(coerce_action)?;

    let symbol = first_present(fields, SYMBOL_KEYS)
        .and_then(coerce_text)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let time = first_present(fields, &["time"])
        .and_then(coerce_text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| format_signal_time(now));

    let mut signal = Signal::new(symbol, action, time);
    if let Some(lot) = fields.get("lot").and_then(coerce_number) {
        signal = signal.with_lot(lot);
    }
    if let Some(price) = fields.get("price").and_then(coerce_price) {
        signal = signal.with_price(price);
    }

    Some(signal)
}

/// One level of nesting only: the inner document must be a direct shape.
fn resolve_nested(raw: &Value, now: Timestamp) -> Option<Signal> {
    let message = raw.as_object()?.get(MESSAGE_KEY)?.as_str()?;
    let inner: Value = serde_json::from_str(message).ok()?;
    resolve_direct(&inner, now)
}

/// Normalize `raw` using `now` for signals that carry no time of their own
pub fn normalize_at(raw: &Value, now: Timestamp) -> Result<Signal, Rejected> {
    PayloadShape::RESOLUTION_ORDER
        .iter()
        .find_map(|shape| shape.resolve(raw, now))
        .ok_or(Rejected)
}

/// Turns decoded webhook bodies into canonical [`Signal`]s
pub struct SignalNormalizer<C: Clock> {
    clock: Arc<C>,
}

impl<C: Clock> SignalNormalizer<C> {
    pub fn new(clock: Arc<C>) -> Self {
        SignalNormalizer { clock }
    }

    pub fn normalize(&self, raw: &Value) -> Result<Signal, Rejected> {
        normalize_at(raw, self.clock.now())
    }
}

impl<C: Clock> Clone for SignalNormalizer<C> {
    fn clone(&self) -> Self {
        SignalNormalizer {
            clock: Arc::clone(&self.clock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Action, SignalPrice};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn fixed_now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    fn normalize(raw: Value) -> Result<Signal, Rejected> {
        normalize_at(&raw, fixed_now())
    }

    #[test]
    fn test_direct_shape_all_fields() {
        let signal = normalize(json!({
            "action": "buy",
            "symbol": " XAUUSD ",
            "lot": 0.05,
            "price": 2350.5,
            "time": "2024-04-30T08:00:00Z"
        }))
        .unwrap();

        assert_eq!(signal.action(), Action::Buy);
        assert_eq!(signal.symbol(), "XAUUSD");
        assert_eq!(signal.lot(), Some(0.05));
        assert_eq!(signal.price(), Some(&SignalPrice::Number(2350.5)));
        assert_eq!(signal.time(), "2024-04-30T08:00:00Z");
    }

    #[test]
    fn test_accepted_actions_case_insensitive() {
        for (raw, expected) in [
            ("buy", Action::Buy),
            ("SELL", Action::Sell),
            (" Close_All ", Action::CloseAll),
        ] {
            let signal = normalize(json!({"action": raw})).unwrap();
            assert_eq!(signal.action(), expected);
        }
    }

    #[test]
    fn test_invalid_actions_rejected() {
        for payload in [
            json!({}),
            json!({"action": "hold"}),
            json!({"action": 1}),
            json!({"action": true}),
            json!({"action": ["buy"]}),
            json!({"symbol": "XAUUSD"}),
            json!("buy"),
            json!(["buy"]),
            Value::Null,
        ] {
            assert_eq!(normalize(payload.clone()), Err(Rejected), "{}", payload);
        }
    }

    #[test]
    fn test_signal_alias_used_when_action_blank() {
        let signal = normalize(json!({"action": "", "signal": "Sell"})).unwrap();
        assert_eq!(signal.action(), Action::Sell);

        let signal = normalize(json!({"signal": "close_all"})).unwrap();
        assert_eq!(signal.action(), Action::CloseAll);
    }

    #[test]
    fn test_action_wins_over_signal_alias() {
        // A present but invalid action is not rescued by the alias.
        assert_eq!(
            normalize(json!({"action": "hold", "signal": "buy"})),
            Err(Rejected)
        );
        let signal = normalize(json!({"action": "sell", "signal": "buy"})).unwrap();
        assert_eq!(signal.action(), Action::Sell);
    }

    #[test]
    fn test_symbol_aliases_and_default() {
        let signal = normalize(json!({"action": "buy", "sym": "EURUSD"})).unwrap();
        assert_eq!(signal.symbol(), "EURUSD");

        let signal = normalize(json!({"action": "buy", "symbol": "", "sym": "GBPUSD"})).unwrap();
        assert_eq!(signal.symbol(), "GBPUSD");

        let signal = normalize(json!({"action": "buy"})).unwrap();
        assert_eq!(signal.symbol(), "");

        let signal = normalize(json!({"action": "buy", "symbol": 1301})).unwrap();
        assert_eq!(signal.symbol(), "1301");
    }

    #[test]
    fn test_time_generated_when_missing_or_empty() {
        let signal = normalize(json!({"action": "buy"})).unwrap();
        assert_eq!(signal.time(), "2024-05-01T12:30:00Z");

        let signal = normalize(json!({"action": "buy", "time": ""})).unwrap();
        assert_eq!(signal.time(), "2024-05-01T12:30:00Z");
    }

    #[test]
    fn test_time_kept_verbatim() {
        let signal = normalize(json!({"action": "buy", "time": "{{timenow}}"})).unwrap();
        assert_eq!(signal.time(), "{{timenow}}");
    }

    #[test]
    fn test_unparseable_lot_is_dropped() {
        let signal = normalize(json!({"action": "buy", "lot": "abc"})).unwrap();
        assert_eq!(signal.lot(), None);

        let signal = normalize(json!({"action": "buy", "lot": "0.2"})).unwrap();
        assert_eq!(signal.lot(), Some(0.2));
    }

    #[test]
    fn test_placeholder_price_kept_as_text() {
        let signal = normalize(json!({"action": "sell", "price": "{{close}}"})).unwrap();

        assert_eq!(signal.price(), Some(&SignalPrice::Text("{{close}}".into())));
        assert_eq!(signal.lot(), None);
    }

    #[test]
    fn test_null_optionals_are_absent() {
        let signal = normalize(json!({"action": "buy", "lot": null, "price": null})).unwrap();
        assert_eq!(signal.lot(), None);
        assert_eq!(signal.price(), None);
    }

    #[test]
    fn test_nested_message_shape() {
        let signal = normalize(json!({
            "message": "{\"action\":\"buy\",\"symbol\":\"XAUUSD\"}"
        }))
        .unwrap();

        assert_eq!(signal.action(), Action::Buy);
        assert_eq!(signal.symbol(), "XAUUSD");
        assert_eq!(signal.time(), "2024-05-01T12:30:00Z");
        assert_eq!(signal.lot(), None);
        assert_eq!(signal.price(), None);
    }

    #[test]
    fn test_direct_shape_takes_precedence_over_message() {
        let signal = normalize(json!({
            "action": "sell",
            "symbol": "EURUSD",
            "message": "{\"action\":\"buy\",\"symbol\":\"XAUUSD\"}"
        }))
        .unwrap();

        assert_eq!(signal.action(), Action::Sell);
        assert_eq!(signal.symbol(), "EURUSD");
    }

    #[test]
    fn test_nested_message_failures() {
        for payload in [
            json!({"message": "buy XAUUSD"}),
            json!({"message": "[\"buy\"]"}),
            json!({"message": {"action": "buy"}}),
            json!({"message": "{\"action\":\"hold\"}"}),
        ] {
            assert_eq!(normalize(payload.clone()), Err(Rejected), "{}", payload);
        }
    }

    #[test]
    fn test_nesting_is_single_level() {
        let inner = json!({"action": "buy"}).to_string();
        let middle = json!({"message": inner}).to_string();
        assert_eq!(normalize(json!({"message": middle})), Err(Rejected));
    }

    #[test]
    fn test_shapes_resolve_independently() {
        let nested = json!({"message": "{\"action\":\"sell\"}"});
        assert!(PayloadShape::Direct.resolve(&nested, fixed_now()).is_none());
        assert!(
            PayloadShape::NestedMessage
                .resolve(&nested, fixed_now())
                .is_some()
        );

        let direct = json!({"action": "sell"});
        assert!(PayloadShape::NestedMessage.resolve(&direct, fixed_now()).is_none());
    }

    #[test]
    fn test_normalize_is_deterministic_with_explicit_time() {
        let payload = json!({"action": "buy", "symbol": "X", "time": "t", "lot": "1"});
        assert_eq!(normalize(payload.clone()), normalize(payload));
    }
}
