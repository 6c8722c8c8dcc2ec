mod clock;
pub mod coercion;
mod normalizer;

pub use clock::Clock;
pub use normalizer::{PayloadShape, Rejected, SignalNormalizer, normalize_at};
