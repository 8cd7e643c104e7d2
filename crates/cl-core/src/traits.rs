//! # Core Traits (Ports)
//!
//! Any remote-gateway plugin must implement this trait to be used by the
//! store. One method per remote operation; no retry at this layer — retry
//! policy, if any, belongs to the caller.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Movie, MovieDraft, Review, ReviewDraft};

/// Remote persistence contract for the catalog.
///
/// Implementations live in plugin crates and must not leak transport types
/// across this boundary: every failure surfaces as
/// [`CatalogError::Remote`](crate::error::CatalogError::Remote).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetches the full movie collection.
    async fn list_movies(&self) -> Result<Vec<Movie>>;

    /// Fetches all reviews for one movie.
    async fn list_reviews(&self, movie_id: i64) -> Result<Vec<Review>>;

    /// Fetches every review in the catalog.
    async fn list_all_reviews(&self) -> Result<Vec<Review>>;

    /// Creates a movie and returns it with its server-assigned id.
    async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie>;

    /// Updates a movie. Omitting the poster in the draft preserves the
    /// prior poster server-side.
    async fn update_movie(&self, movie_id: i64, draft: &MovieDraft) -> Result<Movie>;

    /// Deletes a movie.
    async fn delete_movie(&self, movie_id: i64) -> Result<()>;

    /// Increments the movie's view count server-side and returns the
    /// updated entity. Never incremented locally — concurrent viewers
    /// would drift.
    async fn record_view(&self, movie_id: i64) -> Result<Movie>;

    /// Creates a review for a movie and returns it with its
    /// server-assigned id.
    async fn create_review(&self, movie_id: i64, draft: &ReviewDraft) -> Result<Review>;
}
