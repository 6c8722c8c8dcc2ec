use crate::application::ReceiveSignalError;
use crate::presentation::rest::dto::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

const REJECTED_MESSAGE: &str = "Could not find a valid action (buy, sell or close_all). \
Send either a JSON body with an \"action\" (or \"signal\") field, \
or a JSON-encoded object with that field as the \"message\" string.";

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status: StatusCode,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn invalid_payload() -> Self {
        Self::bad_request("Invalid payload: body must be JSON")
    }

    pub fn rejected_signal() -> Self {
        Self::bad_request(REJECTED_MESSAGE)
    }
}

impl From<ReceiveSignalError> for ApiError {
    fn from(error: ReceiveSignalError) -> Self {
        match error {
            ReceiveSignalError::InvalidPayload => ApiError::invalid_payload(),
            ReceiveSignalError::Rejected(_) => ApiError::rejected_signal(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.message));
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}
