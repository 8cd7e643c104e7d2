//! # Projection Engine
//!
//! Pure derivation of "what the user currently sees": filter-then-sort over
//! the live movie collection, parameterized by the current selection.
//! Recomputed from scratch on every read — no cache, no invalidation.

use crate::models::{Movie, Selection, SortKey};

/// Derives the visible, ordered movie list for a selection.
///
/// Filtering retains a movie iff the search query is empty or a
/// case-insensitive substring of its title or synopsis, and the genre set is
/// empty or at least one of the movie's genres matches a selected genre
/// case-insensitively.
///
/// Sorting is stable; ties keep their input order with no secondary key.
/// `Year`, `Rating` and `ViewCount` sort descending, `Title` ascending.
pub fn project(movies: &[Movie], selection: &Selection) -> Vec<Movie> {
    let query = selection.search_query.to_lowercase();
    let wanted: Vec<String> = selection
        .selected_genres
        .iter()
        .map(|genre| genre.to_lowercase())
        .collect();

    let mut visible: Vec<Movie> = movies
        .iter()
        .filter(|movie| {
            let matches_search = query.is_empty()
                || movie.title.to_lowercase().contains(&query)
                || movie.synopsis.to_lowercase().contains(&query);

            let matches_genre = wanted.is_empty()
                || movie
                    .genres
                    .iter()
                    .any(|genre| wanted.contains(&genre.to_lowercase()));

            matches_search && matches_genre
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable, which is what gives ties their
    // input-order guarantee.
    match selection.sort_key {
        SortKey::Year => visible.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Rating => visible.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::ViewCount => visible.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
        SortKey::Title => visible.sort_by(|a, b| a.title.cmp(&b.title)),
    }

    visible
}
