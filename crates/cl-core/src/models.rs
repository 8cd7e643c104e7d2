//! # Domain Models
//!
//! These structs represent the core entities of the Cinelog catalog.
//! Identifiers are assigned by the remote persistence service on creation
//! and are never fabricated locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the media catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    /// Ordered, distinct genre labels. The wire format delivers these as a
    /// single comma-delimited string; the gateway normalizes on ingestion
    /// and nothing downstream ever sees the delimited form.
    pub genres: Vec<String>,
    pub year: i32,
    /// Intrinsic rating declared for the movie itself, in `[0, 10]`.
    /// Independent of user reviews.
    pub rating: f64,
    pub synopsis: String,
    pub poster_url: String,
    pub trailer_url: String,
    /// Monotonically non-decreasing; incremented server-side only.
    pub view_count: u64,
}

/// A user review attached to a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    /// Foreign reference to a [`Movie`]. Reviews whose movie has been
    /// deleted are purged by the store at deletion time.
    pub movie_id: i64,
    pub author_name: String,
    /// Review score in `[0, 10]`.
    pub rating: f64,
    pub comment: String,
    /// Stamped at submission time.
    pub date: DateTime<Utc>,
}

/// Sort order applied to the visible catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Title,
    Year,
    Rating,
    ViewCount,
}

/// Presentation layout toggle. Carried in the selection state because it is
/// part of the same UI-facing surface, but nothing in the engine reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Ephemeral filter/sort/view selections. Process-local only; there is no
/// server-side counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Matched case-insensitively against title and synopsis.
    pub search_query: String,
    /// Empty means "no genre filter".
    pub selected_genres: Vec<String>,
    pub sort_key: SortKey,
    pub view_mode: ViewMode,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_genres: Vec::new(),
            sort_key: SortKey::Title,
            view_mode: ViewMode::Grid,
        }
    }
}

/// Binary poster asset attached to a movie draft.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

/// Mutable movie fields for create/update calls. Carries no id: the
/// persistence service assigns identifiers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieDraft {
    pub title: String,
    pub genres: Vec<String>,
    pub year: i32,
    pub rating: f64,
    pub synopsis: String,
    pub trailer_url: String,
    /// `None` on update preserves the prior poster server-side.
    pub poster: Option<PosterUpload>,
}

/// Review fields for submission. The store stamps `date` at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub author_name: String,
    pub rating: f64,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// Normalizes a comma-delimited genre string into the canonical in-memory
/// form: split on commas, trim, drop empties, keep first occurrence of
/// duplicates.
pub fn normalize_genres(delimited: &str) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for raw in delimited.split(',') {
        let genre = raw.trim();
        if genre.is_empty() {
            continue;
        }
        if !genres.iter().any(|seen| seen == genre) {
            genres.push(genre.to_string());
        }
    }
    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_splits_and_trims() {
        assert_eq!(
            normalize_genres("Sci-Fi, Drama ,Thriller"),
            vec!["Sci-Fi", "Drama", "Thriller"]
        );
    }

    #[test]
    fn normalize_drops_empty_segments_and_duplicates() {
        assert_eq!(normalize_genres("Drama,,Drama, ,Action"), vec!["Drama", "Action"]);
        assert!(normalize_genres("").is_empty());
        assert!(normalize_genres(" , ,").is_empty());
    }

    #[test]
    fn selection_defaults() {
        let selection = Selection::default();
        assert_eq!(selection.search_query, "");
        assert!(selection.selected_genres.is_empty());
        assert_eq!(selection.sort_key, SortKey::Title);
        assert_eq!(selection.view_mode, ViewMode::Grid);
    }
}
