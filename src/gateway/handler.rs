use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{PredictRequest, PredictResponse, round_index};
use crate::gateway::state::HandlerState;
use crate::gateway::{VERDANT_STATUS_HEADER, VERDANT_STATUS_SCORED};

/// `POST /predict`: scores a description and returns the rounded index.
#[instrument(skip(state, request), fields(description_len = tracing::field::Empty))]
pub async fn predict_handler(
    State(state): State<HandlerState>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError> {
    let request = parse_predict_request(request)?;
    tracing::Span::current().record("description_len", request.description.len());

    debug!("Processing prediction request");

    // The forward pass is CPU-bound; keep it off the async runtime.
    let scorer = state.scorer.clone();
    let description = request.description;
    let score = tokio::task::spawn_blocking(move || scorer.score(&description))
        .await
        .map_err(|e| GatewayError::InternalError(format!("Scoring task failed: {}", e)))??;

    let response = PredictResponse {
        sustainability_index: round_index(score),
    };

    debug!(
        sustainability_index = response.sustainability_index,
        "Prediction complete"
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        VERDANT_STATUS_HEADER,
        HeaderValue::from_static(VERDANT_STATUS_SCORED),
    );
    Ok((StatusCode::OK, headers, Json(response)).into_response())
}

/// Parses the raw body into a [`PredictRequest`], mapping the two rejection
/// cases onto distinct 400 messages.
pub(crate) fn parse_predict_request(
    request: serde_json::Value,
) -> Result<PredictRequest, GatewayError> {
    if request.get("description").is_none() {
        return Err(GatewayError::InvalidRequest(
            "Missing `description` field".to_string(),
        ));
    }

    serde_json::from_value(request)
        .map_err(|_| GatewayError::InvalidRequest("`description` must be a string".to_string()))
}
