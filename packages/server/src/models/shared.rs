use std::collections::HashSet;

use crate::error::AppError;

/// Validate an optional title/lead/body value (max 255 Unicode characters
/// for titles; a missing value defaults to the empty string downstream).
pub fn validate_optional_title(title: Option<&str>) -> Result<(), AppError> {
    if let Some(title) = title
        && title.trim().chars().count() > 255
    {
        return Err(AppError::Validation(
            "Title must be at most 255 characters".into(),
        ));
    }
    Ok(())
}

/// Validate a hearing slug: non-empty, at most 255 characters, lowercase
/// letters, digits and hyphens only.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    let slug = slug.trim();
    if slug.is_empty() || slug.chars().count() > 255 {
        return Err(AppError::Validation("Slug must be 1-255 characters".into()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AppError::Validation(
            "Slug may only contain lowercase letters, digits and hyphens".into(),
        ));
    }
    Ok(())
}

/// Validate an optional position field (must be >= 0 when present).
pub fn validate_optional_position(pos: Option<i32>) -> Result<(), AppError> {
    if let Some(pos) = pos
        && pos < 0
    {
        return Err(AppError::Validation("Position must be >= 0".into()));
    }
    Ok(())
}

/// Validate an ordered ID list for reorder operations (non-empty, no duplicates).
pub fn validate_reorder_ids(ids: &[i32], name: &str) -> Result<(), AppError> {
    if ids.is_empty() {
        return Err(AppError::Validation(format!("{name}s must not be empty")));
    }
    let mut seen = HashSet::new();
    for &id in ids {
        if !seen.insert(id) {
            return Err(AppError::Validation(format!(
                "Duplicate {name} {id} in reorder list"
            )));
        }
    }
    Ok(())
}
