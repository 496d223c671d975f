pub mod alternative;
pub mod feedback;
pub mod hearing;
pub mod image;

/// An entity that can be the target of user comments.
///
/// Every commentable entity is addressed by a stable string identifier of the
/// form `{kind}-{id}` and carries a human-readable label. The two are encoded
/// together as a single `id:name` token, which the frontend uses to attach
/// comment widgets to page sections.
pub trait Commentable {
    fn commentable_id(&self) -> String;

    fn commentable_name(&self) -> String;

    fn commentable_option(&self) -> String {
        format!("{}:{}", self.commentable_id(), self.commentable_name())
    }
}
