use crate::domain::value_objects::Timestamp;

/// Basic clock trait - provides current time
///
/// The normalizer stamps signals that arrive without a `time` field using
/// this clock, so tests can pin the generated timestamp.
pub trait Clock: Send + Sync {
    /// Get current time from this clock's perspective
    fn now(&self) -> Timestamp;
}
