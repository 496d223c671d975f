use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Commentable, alternative};
use crate::error::AppError;
use crate::models::shared::{validate_optional_position, validate_optional_title};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateAlternativeRequest {
    /// Defaults to the empty string when absent or null.
    pub title: Option<String>,
    pub lead: Option<String>,
    pub body: Option<String>,
    /// Insertion index within the hearing's display order. Absent appends;
    /// an index past the end is treated as an append.
    pub position: Option<i32>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct ReorderAlternativesRequest {
    /// Ordered list of alternative IDs. Positions assigned 0, 1, 2, ... by
    /// array index. Must contain exactly the hearing's current alternatives.
    pub alternative_ids: Vec<i32>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AlternativeResponse {
    pub id: i32,
    pub title: String,
    pub lead: String,
    pub body: String,
    pub hearing_id: Option<i32>,
    pub position: Option<i32>,
    /// Display label derived from the position: A, B, C, ...
    pub letter: String,
    pub commentable_id: String,
    pub commentable_name: String,
    pub commentable_option: String,
    pub main_image_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<alternative::Model> for AlternativeResponse {
    fn from(m: alternative::Model) -> Self {
        let letter = m.letter().to_string();
        let commentable_id = m.commentable_id();
        let commentable_name = m.commentable_name();
        let commentable_option = m.commentable_option();
        Self {
            id: m.id,
            title: m.title,
            lead: m.lead,
            body: m.body,
            hearing_id: m.hearing_id,
            position: m.position,
            letter,
            commentable_id,
            commentable_name,
            commentable_option,
            main_image_id: m.main_image_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub fn validate_create_alternative(payload: &CreateAlternativeRequest) -> Result<(), AppError> {
    validate_optional_title(payload.title.as_deref())?;
    validate_optional_position(payload.position)?;
    Ok(())
}
