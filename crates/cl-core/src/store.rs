//! # Catalog Store
//!
//! The single authoritative holder of the movie and review collections and
//! the UI-facing selection state. All persisted mutations go through the
//! [`CatalogGateway`] port and are reconciled here; every mutation is
//! all-or-nothing — on failure the collections stay exactly as they were.
//!
//! One store instance per process/session, threaded through explicitly.
//! Mutation methods take `&mut self`, so no reader can observe a
//! partially-applied mutation.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::models::{Movie, MovieDraft, Review, ReviewDraft, Selection, SortKey, ViewMode};
use crate::projection::project;
use crate::ratings::average_rating;
use crate::traits::CatalogGateway;

pub struct CatalogStore {
    gateway: Arc<dyn CatalogGateway>,
    movies: Vec<Movie>,
    reviews: Vec<Review>,
    selection: Selection,
    is_loading: bool,
    last_error: Option<CatalogError>,
}

impl CatalogStore {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self {
            gateway,
            movies: Vec::new(),
            reviews: Vec::new(),
            selection: Selection::default(),
            is_loading: false,
            last_error: None,
        }
    }

    // ----- gateway-backed mutations -----

    /// Fetches and replaces the full movie collection. On failure the prior
    /// collection is untouched and the failure is recorded.
    pub async fn load_movies(&mut self) -> Result<()> {
        self.is_loading = true;
        match self.gateway.list_movies().await {
            Ok(movies) => {
                debug!(count = movies.len(), "loaded movie collection");
                self.movies = movies;
                self.settle_ok("list_movies");
                Ok(())
            }
            Err(err) => Err(self.settle_err(err)),
        }
    }

    /// Fetches reviews for one movie and merges them in by replacing all of
    /// that movie's reviews. Repeated calls do not accumulate duplicates;
    /// other movies' reviews are untouched.
    pub async fn load_reviews_for(&mut self, movie_id: i64) -> Result<()> {
        self.is_loading = true;
        match self.gateway.list_reviews(movie_id).await {
            Ok(fetched) => {
                self.reviews.retain(|review| review.movie_id != movie_id);
                self.reviews.extend(fetched);
                self.settle_ok("list_reviews");
                Ok(())
            }
            Err(err) => Err(self.settle_err(err)),
        }
    }

    /// Fetches and replaces the entire review collection.
    pub async fn load_all_reviews(&mut self) -> Result<()> {
        self.is_loading = true;
        match self.gateway.list_all_reviews().await {
            Ok(reviews) => {
                debug!(count = reviews.len(), "loaded review collection");
                self.reviews = reviews;
                self.settle_ok("list_all_reviews");
                Ok(())
            }
            Err(err) => Err(self.settle_err(err)),
        }
    }

    /// Creates a movie remotely and appends the server-returned entity
    /// (carrying its assigned id) to the collection.
    pub async fn create_movie(&mut self, draft: &MovieDraft) -> Result<()> {
        match self.gateway.create_movie(draft).await {
            Ok(created) => {
                self.movies.push(created);
                self.settle_ok("create_movie");
                Ok(())
            }
            Err(err) => Err(self.settle_err(err)),
        }
    }

    /// Updates a movie remotely and replaces the matching entry in place,
    /// preserving its position in the collection.
    pub async fn update_movie(&mut self, movie_id: i64, draft: &MovieDraft) -> Result<()> {
        match self.gateway.update_movie(movie_id, draft).await {
            Ok(updated) => {
                if let Some(slot) = self.movies.iter_mut().find(|m| m.id == movie_id) {
                    *slot = updated;
                }
                self.settle_ok("update_movie");
                Ok(())
            }
            Err(err) => Err(self.settle_err(err)),
        }
    }

    /// Deletes a movie remotely, then removes it locally together with
    /// every review that references it. Orphaned reviews never survive a
    /// deletion; on failure both collections are unchanged.
    pub async fn delete_movie(&mut self, movie_id: i64) -> Result<()> {
        match self.gateway.delete_movie(movie_id).await {
            Ok(()) => {
                self.movies.retain(|movie| movie.id != movie_id);
                self.reviews.retain(|review| review.movie_id != movie_id);
                self.settle_ok("delete_movie");
                Ok(())
            }
            Err(err) => Err(self.settle_err(err)),
        }
    }

    /// Records a view. The increment happens server-side and the returned
    /// entity replaces the local one; the count is never bumped locally, so
    /// concurrent viewers cannot cause drift.
    pub async fn record_view(&mut self, movie_id: i64) -> Result<()> {
        match self.gateway.record_view(movie_id).await {
            Ok(updated) => {
                if let Some(slot) = self.movies.iter_mut().find(|m| m.id == movie_id) {
                    *slot = updated;
                }
                self.settle_ok("record_view");
                Ok(())
            }
            Err(err) => Err(self.settle_err(err)),
        }
    }

    /// Submits a review. Rejected locally — without any gateway call — when
    /// the rating is zero or the comment or author name is blank, so the
    /// engine is correct independent of any submit guard in a UI. On
    /// acceptance the submission date is stamped here.
    pub async fn submit_review(
        &mut self,
        movie_id: i64,
        author_name: &str,
        rating: f64,
        comment: &str,
    ) -> Result<()> {
        if rating == 0.0 {
            return Err(CatalogError::Validation("a rating must be given".into()));
        }
        if comment.trim().is_empty() {
            return Err(CatalogError::Validation("comment must not be blank".into()));
        }
        if author_name.trim().is_empty() {
            return Err(CatalogError::Validation("author name must not be blank".into()));
        }

        let draft = ReviewDraft {
            author_name: author_name.to_string(),
            rating,
            comment: comment.to_string(),
            date: Utc::now(),
        };
        match self.gateway.create_review(movie_id, &draft).await {
            Ok(created) => {
                self.reviews.push(created);
                self.settle_ok("create_review");
                Ok(())
            }
            Err(err) => Err(self.settle_err(err)),
        }
    }

    // ----- selection setters (synchronous, no gateway involvement) -----

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.selection.search_query = query.into();
    }

    pub fn set_selected_genres(&mut self, genres: Vec<String>) {
        self.selection.selected_genres = genres;
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.selection.sort_key = sort_key;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.selection.view_mode = view_mode;
    }

    // ----- read surface -----

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&CatalogError> {
        self.last_error.as_ref()
    }

    /// The filtered/sorted view of the catalog under the current selection.
    /// Derived from scratch on every call.
    pub fn visible_movies(&self) -> Vec<Movie> {
        project(&self.movies, &self.selection)
    }

    pub fn reviews_for(&self, movie_id: i64) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|review| review.movie_id == movie_id)
            .collect()
    }

    /// Average review rating for a movie; `0.0` when it has no reviews
    /// (callers typically fall back to the movie's intrinsic rating).
    pub fn average_rating(&self, movie_id: i64) -> f64 {
        average_rating(&self.reviews, movie_id)
    }

    // ----- bookkeeping -----

    /// A successful call clears the loading flag, and clears the recorded
    /// failure if it came from the same kind of operation.
    fn settle_ok(&mut self, op: &'static str) {
        self.is_loading = false;
        if let Some(CatalogError::Remote { op: failed, .. }) = &self.last_error {
            if *failed == op {
                self.last_error = None;
            }
        }
    }

    /// A failed call clears the loading flag and becomes the last error.
    fn settle_err(&mut self, err: CatalogError) -> CatalogError {
        self.is_loading = false;
        warn!(error = %err, "catalog gateway call failed");
        self.last_error = Some(err.clone());
        err
    }
}
