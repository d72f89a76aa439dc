use super::types::{ErrorResponse, ScanRequest, ScanResponse};
use crate::recognition::{RecognitionRequest, RecognitionResult, RecognitionService};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// One generic message for every upstream failure class. The wire stays
/// coarse; logs carry the real class.
const UPSTREAM_ERROR_MESSAGE: &str = "Error related to the API";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecognitionService>,
}

pub async fn scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "Received scan request");

    let recognition = RecognitionRequest {
        image: request.image,
        instruction: request.message,
    };

    match state.service.handle(recognition).await {
        Ok(answer) => {
            info!(%request_id, "Scan request completed");
            Ok(Json(ScanResponse { answer }))
        }
        Err(e) => {
            error!(%request_id, class = e.class(), "Scan request failed: {}", e);
            Err((
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorResponse {
                    error: UPSTREAM_ERROR_MESSAGE.to_string(),
                }),
            ))
        }
    }
}

pub async fn latest(State(state): State<AppState>) -> Json<Option<RecognitionResult>> {
    Json(state.service.latest().await)
}
