mod fixed_clock;
mod system_clock;

pub use fixed_clock::FixedClock;
pub use system_clock::SystemClock;
