//! Goal Routes - Goal coaching submissions

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};

use imgonna::{GoalRequest, GoalResponse};

use crate::AppState;

/// Submit a goal for coaching
///
/// The body is decoded and validated here rather than by the `Json`
/// extractor so that malformed payloads still receive a `GoalResponse`.
#[utoipa::path(
    post,
    path = "/api/v1/goals",
    request_body = GoalRequest,
    responses(
        (status = 200, description = "Goal processed", body = GoalResponse),
        (status = 400, description = "Invalid request", body = GoalResponse),
        (status = 500, description = "Failed to process goal", body = GoalResponse)
    ),
    tag = "Goals"
)]
pub async fn create_goal(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<GoalResponse>) {
    let (status, envelope) = state.goal_service.submit(&body).await;
    (status, Json(envelope))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/goals", post(create_goal))
}
