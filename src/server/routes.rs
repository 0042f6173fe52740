//! The /api/generate handler
//!
//! Every path out of here is a `GenerationResult` envelope: success is 200,
//! classified failures map to the status their taxonomy dictates, and the
//! wrong HTTP method gets the original contract's 405 body.

use super::ServerAppState;
use crate::models::{GenerationRequest, GenerationResult};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Main generation handler
pub async fn generate_handler(
    State(state): State<ServerAppState>,
    Json(request): Json<GenerationRequest>,
) -> Response {
    log::debug!(
        "Generate request: mode={:?} topic='{}' mock={}",
        request.mode,
        request.topic,
        request.mock
    );

    match state.service.generate(&request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            log::warn!("Generation failed: {}", err);
            let result =
                GenerationResult::failure(err.to_string(), err.raw().map(str::to_string));
            (err.status(), Json(result)).into_response()
        }
    }
}

/// Any non-POST method on /api/generate
pub async fn post_only_handler() -> Response {
    let result = GenerationResult::failure("POST only".to_string(), None);
    (StatusCode::METHOD_NOT_ALLOWED, Json(result)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_post_only_body() {
        let response = post_only_handler().await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
