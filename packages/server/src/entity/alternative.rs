use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::Commentable;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alternative")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub lead: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,

    /// NULL for an alternative that is not attached to any hearing.
    pub hearing_id: Option<i32>,
    #[sea_orm(belongs_to, from = "hearing_id", to = "id")]
    pub hearing: Option<super::hearing::Entity>,

    /// Zero-based index within the owning hearing's display order. NULL while
    /// unattached. Renumbered transactionally on every structural mutation of
    /// the hearing's alternative set.
    pub position: Option<i32>,

    /// References `image.id`. Kept as a plain column instead of a relation so
    /// that `alternative` and `image` do not form a foreign-key cycle.
    pub main_image_id: Option<i32>,

    #[sea_orm(has_many)]
    pub images: HasMany<super::image::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl ActiveModelBehavior for ActiveModel {}

/// Display letter for a position: 0 maps to 'A', 1 to 'B' and so on.
/// An alternative without a position is labeled 'A'.
pub fn letter_for(position: Option<i32>) -> char {
    match position {
        Some(position) if position >= 0 => {
            char::from_u32(u32::from('A') + position as u32).unwrap_or('A')
        }
        _ => 'A',
    }
}

impl Model {
    pub fn letter(&self) -> char {
        letter_for(self.position)
    }

    /// The commentable sections of this alternative: its own token, the main
    /// image's token when a main image is set, and one token per associated
    /// image. Pure read over the given state.
    pub fn commentable_sections_string(
        &self,
        main_image: Option<&super::image::Model>,
        images: &[super::image::Model],
    ) -> String {
        let mut sections = vec![self.commentable_option()];
        if let Some(image) = main_image {
            sections.push(image.commentable_option());
        }
        sections.extend(images.iter().map(Commentable::commentable_option));
        sections.join(";")
    }
}

impl Commentable for Model {
    fn commentable_id(&self) -> String {
        format!("alternative-{}", self.id)
    }

    fn commentable_name(&self) -> String {
        format!("Vaihtoehto {}", self.letter())
    }
}
