//! Per-field coercions for loosely typed alert payloads.
//!
//! Each function answers "does this JSON value yield a usable field?" with an
//! `Option`. `None` means the field is treated as absent; none of them fail a
//! whole signal on their own.

use crate::domain::value_objects::{Action, SignalPrice};
use serde_json::{Map, Value};

/// JSON values that count as "not provided" when picking between aliases
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// First non-blank value among `keys`, in order
pub fn first_present<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !is_blank(value))
}

/// Render a scalar or structure as text. Strings are returned verbatim.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Number from a JSON number or a numeric string. Non-finite results are
/// rejected because they cannot be written back out as JSON numbers.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Numeric price when possible, otherwise the original value as text
pub fn coerce_price(value: &Value) -> Option<SignalPrice> {
    if value.is_null() {
        return None;
    }
    coerce_number(value)
        .map(SignalPrice::Number)
        .or_else(|| coerce_text(value).map(SignalPrice::Text))
}

/// Only strings can name an action; numbers and other types never do.
pub fn coerce_action(value: &Value) -> Option<Action> {
    value.as_str().and_then(|s| Action::try_from(s).ok())
}
