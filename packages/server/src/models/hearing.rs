use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Commentable, hearing};
use crate::error::AppError;
use crate::models::alternative::AlternativeResponse;
use crate::models::shared::{validate_optional_title, validate_slug};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateHearingRequest {
    /// Defaults to the empty string when absent or null.
    pub title: Option<String>,
    pub slug: String,
    pub lead: Option<String>,
    pub body: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct HearingResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub lead: String,
    pub body: String,
    pub commentable_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full hearing document served by the public show page and the admin
/// detail endpoint.
#[derive(Serialize, utoipa::ToSchema)]
pub struct HearingDetailResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub lead: String,
    pub body: String,
    pub commentable_id: String,
    /// Semicolon-joined `id:name` tokens for every commentable section of
    /// this hearing and its alternatives.
    pub commentable_sections_string: String,
    pub alternatives: Vec<AlternativeResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<hearing::Model> for HearingResponse {
    fn from(m: hearing::Model) -> Self {
        let commentable_id = m.commentable_id();
        Self {
            id: m.id,
            title: m.title,
            slug: m.slug,
            lead: m.lead,
            body: m.body,
            commentable_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub fn validate_create_hearing(payload: &CreateHearingRequest) -> Result<(), AppError> {
    validate_slug(&payload.slug)?;
    validate_optional_title(payload.title.as_deref())?;
    Ok(())
}
