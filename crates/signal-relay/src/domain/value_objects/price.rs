use serde::Serialize;

/// Price attached to a signal.
///
/// Alert templates sometimes deliver unexpanded placeholders such as
/// `{{close}}`; those are kept as text instead of failing the signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SignalPrice {
    Number(f64),
    Text(String),
}

impl From<&str> for SignalPrice {
    fn from(value: &str) -> Self {
        SignalPrice::Text(value.to_string())
    }
}
