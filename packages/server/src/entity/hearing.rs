use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::Commentable;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hearing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    /// URL segment of the canonical address. Requests carrying a stale slug
    /// are redirected to the current one.
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub lead: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,

    #[sea_orm(has_many)]
    pub alternatives: HasMany<super::alternative::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl ActiveModelBehavior for ActiveModel {}

impl Commentable for Model {
    fn commentable_id(&self) -> String {
        format!("hearing-{}", self.id)
    }

    fn commentable_name(&self) -> String {
        "Kuuleminen".to_string()
    }
}
