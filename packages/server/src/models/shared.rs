use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;
use crate::flash::Flash;

/// A rendered page: the template that would display it, the notices queued
/// for it, and its view model.
#[derive(Serialize, utoipa::ToSchema)]
pub struct Page<T> {
    #[schema(example = "pages/show_venue.html")]
    pub template: &'static str,
    pub flashes: Vec<Flash>,
    pub data: T,
}

impl<T> Page<T> {
    pub fn new(template: &'static str, flashes: Vec<Flash>, data: T) -> Self {
        Self {
            template,
            flashes,
            data,
        }
    }
}

/// Landing page view model. Carries nothing besides the notices.
#[derive(Serialize, Default, utoipa::ToSchema)]
pub struct HomePage {}

/// Body of `POST /venues/search` and `POST /artists/search`.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// One matching record in a search result.
#[derive(Serialize, Debug, PartialEq, Eq, utoipa::ToSchema)]
pub struct SearchItem {
    pub id: i32,
    #[schema(example = "The Musical Hop")]
    pub name: String,
    pub num_upcoming_shows: u64,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SearchResults {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<SearchItem>,
}

/// Case-insensitive "name contains `term`", folding case with Unicode rules
/// on both sides. A blank term matches every name.
pub fn name_matches(name: &str, term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Serde helper for HTML checkboxes: accepts `y`, `on`, `yes`, `true` and `1`
/// as checked; anything else (including an absent field) is unchecked.
pub fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        raw.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref(),
        Some("y" | "on" | "yes" | "true" | "1")
    ))
}

/// Trim a free-text form value, mapping blank input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validate a required text field (trimmed, 1..=max characters).
pub fn validate_required(value: &str, field: &str, max: usize) -> Result<(), AppError> {
    let value = value.trim();
    if value.is_empty() || value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{field} must be 1-{max} characters"
        )));
    }
    Ok(())
}

/// Validate an optional text field (at most `max` characters when present).
pub fn validate_optional(value: Option<&str>, field: &str, max: usize) -> Result<(), AppError> {
    if let Some(value) = value
        && value.trim().chars().count() > max
    {
        return Err(AppError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Validate a genre list: non-empty, no blank entries.
pub fn validate_genres(genres: &[String]) -> Result<(), AppError> {
    if genres.is_empty() {
        return Err(AppError::Validation(
            "At least one genre is required".into(),
        ));
    }
    if genres.iter().any(|g| g.trim().is_empty()) {
        return Err(AppError::Validation("Genres must not be blank".into()));
    }
    Ok(())
}

/// Trim genre names, keeping their order.
pub fn clean_genres(genres: Vec<String>) -> Vec<String> {
    genres.into_iter().map(|g| g.trim().to_string()).collect()
}
