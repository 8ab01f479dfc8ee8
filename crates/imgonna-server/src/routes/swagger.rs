//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use imgonna::{GoalRequest, GoalResponse, MediaItem, MediaRecommendations};

use super::health::{ApiInfoResponse, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        super::health::health_check,
        super::health::api_info,
        // Goal endpoints
        super::goals::create_goal,
    ),
    info(
        title = "imgonna API",
        version = "0.1.0",
        description = "Goal coaching API - supportive guidance and media recommendations for personal goals.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Goals", description = "Goals - Coaching responses with media recommendations"),
    ),
    components(
        schemas(
            // Health
            HealthResponse,
            ApiInfoResponse,
            // Goals
            GoalRequest,
            GoalResponse,
            MediaItem,
            MediaRecommendations,
        )
    ),
)]
pub struct ApiDoc;
