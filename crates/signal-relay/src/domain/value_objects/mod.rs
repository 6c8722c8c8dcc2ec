mod action;
mod price;
mod timestamp;

pub use action::Action;
pub use price::SignalPrice;
pub use timestamp::{SIGNAL_TIME_FORMAT, Timestamp, format_signal_time};
