use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::kernel::InterviewMap;
use crate::server::app::AppState;
use crate::server::routes::ApiResponse;

#[derive(Deserialize)]
pub struct SearchInterviewsRequest {
    pub leaders: Vec<LeaderRef>,
    pub company_name: String,
}

/// Leaders are referenced by name only at this boundary.
#[derive(Deserialize)]
pub struct LeaderRef {
    pub name: String,
}

#[derive(Serialize)]
pub struct InterviewResults {
    pub interviews: InterviewMap,
}

/// Search for recent interviews for each listed leader.
pub async fn search_interviews_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<SearchInterviewsRequest>,
) -> (StatusCode, Json<ApiResponse<InterviewResults>>) {
    let names: Vec<String> = request
        .leaders
        .iter()
        .map(|leader| leader.name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err("at least one leader name is required")),
        );
    }

    let interviews = state
        .interviews
        .search_leaders(&names, &request.company_name)
        .await;

    (
        StatusCode::OK,
        Json(ApiResponse::ok(InterviewResults { interviews })),
    )
}
