use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::feedback;

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub content: Option<String>,
    /// Honeypot field. Hidden in the form, so a legitimate submission leaves
    /// it absent or empty; any non-empty value marks automated spam.
    pub hp: Option<String>,
    pub comment_id: Option<i32>,
    pub user_id: Option<i32>,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub id: i32,
    pub content: String,
    pub comment_id: Option<i32>,
    pub user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<feedback::Model> for FeedbackResponse {
    fn from(m: feedback::Model) -> Self {
        Self {
            id: m.id,
            content: m.content,
            comment_id: m.comment_id,
            user_id: m.user_id,
            created_at: m.created_at,
        }
    }
}
