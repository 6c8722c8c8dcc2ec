mod latest_signal;
mod receive_signal;

pub use latest_signal::LatestSignalUseCase;
pub use receive_signal::{ReceiveSignalError, ReceiveSignalUseCase};
