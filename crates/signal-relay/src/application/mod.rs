pub mod ports;
pub mod use_cases;

pub use ports::SignalStore;
pub use use_cases::{LatestSignalUseCase, ReceiveSignalError, ReceiveSignalUseCase};
