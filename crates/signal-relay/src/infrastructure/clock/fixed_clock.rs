use crate::domain::{Clock, Timestamp};
use chrono::{DateTime, Utc};

/// Clock pinned to one instant (for tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: Timestamp,
}

impl FixedClock {
    pub fn at(time: Timestamp) -> Self {
        FixedClock { time }
    }

    pub fn from_rfc3339(value: &str) -> Result<Self, chrono::ParseError> {
        let time = DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc);
        Ok(Self::at(time))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.time
    }
}
