use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::feedback;
use crate::error::AppError;
use crate::extractors::json::AppJson;
use crate::models::feedback::{FeedbackRequest, FeedbackResponse};
use crate::state::AppState;

/// One message for every rejected submission. Missing content and a filled
/// honeypot must be indistinguishable to an automated submitter.
const REJECTED: &str = "Invalid feedback submission";

/// `POST /feedback` — persist citizen feedback.
///
/// Rejected with a uniform 400 when the body is missing or unreadable, when
/// the content is missing or empty after trimming, or when the honeypot
/// field carries a non-empty value. Every rejection uses the same message,
/// so the extractor result is absorbed here instead of bubbling up axum's
/// rejection text. An empty `hp` is what the real form submits and is
/// accepted.
#[instrument(skip(state, payload))]
pub async fn create_feedback(
    State(state): State<AppState>,
    payload: Result<AppJson<FeedbackRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let AppJson(payload) = payload.map_err(|_| AppError::Validation(REJECTED.into()))?;

    let content = payload.content.as_deref().map(str::trim).unwrap_or_default();
    if content.is_empty() {
        return Err(AppError::Validation(REJECTED.into()));
    }
    if payload.hp.as_deref().is_some_and(|hp| !hp.is_empty()) {
        return Err(AppError::Validation(REJECTED.into()));
    }

    let new_feedback = feedback::ActiveModel {
        content: Set(content.to_string()),
        comment_id: Set(payload.comment_id),
        user_id: Set(payload.user_id),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let model = new_feedback.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(FeedbackResponse::from(model))))
}
