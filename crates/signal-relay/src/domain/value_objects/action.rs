use serde::Serialize;
use std::fmt;

/// Trading instruction carried by a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Buy,
    Sell,
    CloseAll,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "buy",
            Action::Sell => "sell",
            Action::CloseAll => "close_all",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Action {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "buy" => Ok(Action::Buy),
            "sell" => Ok(Action::Sell),
            "close_all" => Ok(Action::CloseAll),
            _ => Err("Invalid action: must be buy, sell or close_all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_and_whitespace_insensitive() {
        assert_eq!(Action::try_from(" BUY ").unwrap(), Action::Buy);
        assert_eq!(Action::try_from("Sell").unwrap(), Action::Sell);
        assert_eq!(Action::try_from("close_ALL\n").unwrap(), Action::CloseAll);
    }

    #[test]
    fn test_rejects_unknown_actions() {
        assert!(Action::try_from("hold").is_err());
        assert!(Action::try_from("close all").is_err());
        assert!(Action::try_from("").is_err());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Action::CloseAll).unwrap(),
            "\"close_all\""
        );
        assert_eq!(Action::Buy.to_string(), "buy");
    }
}
