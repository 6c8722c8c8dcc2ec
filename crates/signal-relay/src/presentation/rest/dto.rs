use crate::domain::Signal;
use serde::Serialize;

/// Body of a successful `POST /webhook`
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAcceptedResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: Signal,
}

impl WebhookAcceptedResponse {
    pub fn new(signal: Signal) -> Self {
        WebhookAcceptedResponse {
            status: "success",
            message: "Signal received",
            data: signal,
        }
    }
}

/// `GET /signals` body: either `{"status":"empty"}` or the bare signal
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LatestSignalResponse {
    Empty { status: &'static str },
    Holding(Signal),
}

impl From<Option<Signal>> for LatestSignalResponse {
    fn from(signal: Option<Signal>) -> Self {
        match signal {
            Some(signal) => LatestSignalResponse::Holding(signal),
            None => LatestSignalResponse::Empty { status: "empty" },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn cleared() -> Self {
        StatusResponse { status: "cleared" }
    }
}

/// Error body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            status: "error",
            message: message.into(),
        }
    }
}
