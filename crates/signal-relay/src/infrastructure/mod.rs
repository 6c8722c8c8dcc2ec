pub mod clock;
pub mod config;
pub mod repositories;

pub use clock::{FixedClock, SystemClock};
pub use config::{ConfigError, LogFormat, LoggingConfig, RelayConfig, ServerConfig};
pub use repositories::InMemorySignalStore;
