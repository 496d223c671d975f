use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Free-form site feedback submitted by citizens. The comment and user
/// references are kept as plain nullable columns; comment threads and user
/// accounts live outside this service's scope.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub comment_id: Option<i32>,
    pub user_id: Option<i32>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
