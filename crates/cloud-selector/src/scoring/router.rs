use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::Value;
use tracing::warn;

use super::{AnalysisResponse, ScoringEngine};

/// Router builder exposing the provider analysis endpoint.
pub fn analysis_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .with_state(engine)
}

/// Any JSON body gets a 200 with a success or failure payload; bodies that
/// are not JSON at all are answered with a 500.
pub(crate) async fn analyze_handler(
    State(engine): State<Arc<ScoringEngine>>,
    body: Bytes,
) -> Response {
    match serde_json::from_slice::<Value>(&body) {
        Ok(criteria) => (StatusCode::OK, axum::Json(engine.analyze(&criteria))).into_response(),
        Err(err) => {
            warn!(error = %err, "analysis request body is not valid JSON");
            let payload = AnalysisResponse::failure("Analysis failed");
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
