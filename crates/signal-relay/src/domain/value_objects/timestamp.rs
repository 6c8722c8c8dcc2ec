use chrono::{DateTime, Utc};

pub type Timestamp = DateTime<Utc>;

/// Canonical signal time layout, second precision UTC
pub const SIGNAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn format_signal_time(time: Timestamp) -> String {
    time.format(SIGNAL_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_drops_subseconds() {
        let t = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap()
            + chrono::Duration::milliseconds(987);
        assert_eq!(format_signal_time(t), "2024-03-07T09:05:01Z");
    }
}
