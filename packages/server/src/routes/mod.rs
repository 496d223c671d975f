mod v1;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa_axum::router::OpenApiRouter;

use crate::handlers;
use crate::state::AppState;

/// Admin API, documented via OpenAPI.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest("/v1", v1::routes())
}

/// Citizen-facing routes served at the site root, outside the documented
/// API: the hearing pages and the feedback form endpoint.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/kuulemiset", get(handlers::hearing::index))
        .route("/kuulemiset/{key}", get(handlers::hearing::show))
        .route("/feedback", post(handlers::feedback::create_feedback))
}
