use axum::{extract::Extension, http::StatusCode, Json};
use serde::Deserialize;

use leadscout::{AnalysisReport, LeadScoutError};

use crate::server::app::AppState;
use crate::server::routes::ApiResponse;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Analyze a company URL and return leader information.
///
/// Invalid input is the caller's problem (400); everything else the
/// analyzer absorbs into a degraded-but-successful report.
pub async fn analyze_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> (StatusCode, Json<ApiResponse<AnalysisReport>>) {
    match state.analyzer.analyze(&request.url).await {
        Ok(report) => (StatusCode::OK, Json(ApiResponse::ok(report))),
        Err(e @ LeadScoutError::InvalidInput { .. }) => {
            (StatusCode::BAD_REQUEST, Json(ApiResponse::err(e.to_string())))
        }
        Err(e) => {
            tracing::error!(error = %e, "analyze failed unexpectedly");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::err("an internal error occurred")),
            )
        }
    }
}
