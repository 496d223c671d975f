use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::Commentable;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub filename: String,
    pub caption: String,

    pub alternative_id: Option<i32>,
    #[sea_orm(belongs_to, from = "alternative_id", to = "id")]
    pub alternative: Option<super::alternative::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

impl Commentable for Model {
    fn commentable_id(&self) -> String {
        format!("image-{}", self.id)
    }

    fn commentable_name(&self) -> String {
        if self.caption.is_empty() {
            "Kuva".to_string()
        } else {
            self.caption.clone()
        }
    }
}
