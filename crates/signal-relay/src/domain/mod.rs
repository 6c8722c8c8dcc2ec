pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::Signal;

pub use services::{Clock, PayloadShape, Rejected, SignalNormalizer, normalize_at};

pub use value_objects::{Action, SIGNAL_TIME_FORMAT, SignalPrice, Timestamp, format_signal_time};
