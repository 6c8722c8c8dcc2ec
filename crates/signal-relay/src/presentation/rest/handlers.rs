use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{LatestSignalUseCase, ReceiveSignalUseCase};
use crate::domain::Clock;
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /
pub async fn home() -> &'static str {
    "TradingView webhook relay is running"
}

/// POST /webhook
///
/// The body is taken as raw bytes so a missing or non-JSON body becomes a
/// 400 instead of an extractor rejection.
pub async fn receive_webhook<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    body: Bytes,
) -> Result<Json<WebhookAcceptedResponse>, ApiError> {
    let payload = decode_body(&body);
    if payload.is_none() {
        tracing::warn!(bytes = body.len(), "Webhook body is not valid JSON");
    }

    let use_case = ReceiveSignalUseCase::new(
        state.normalizer.clone(),
        Arc::clone(&state.signal_store),
    );

    let signal = use_case.execute(payload).await?;
    Ok(Json(WebhookAcceptedResponse::new(signal)))
}

/// GET /signals
pub async fn latest_signal<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
) -> Json<LatestSignalResponse> {
    let use_case = LatestSignalUseCase::new(Arc::clone(&state.signal_store));
    Json(use_case.get().await.into())
}

/// POST /clear
pub async fn clear_signal<C: Clock>(State(state): State<Arc<AppState<C>>>) -> Json<StatusResponse> {
    let use_case = LatestSignalUseCase::new(Arc::clone(&state.signal_store));
    use_case.clear().await;
    Json(StatusResponse::cleared())
}

fn decode_body(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice(body).ok()
}
