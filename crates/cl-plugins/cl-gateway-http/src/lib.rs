//! # cl-gateway-http
//! cinelog/crates/cl-plugins/cl-gateway-http/src/lib.rs
//! HTTP implementation of [`CatalogGateway`] against the remote persistence
//! service. One request per operation, no retries — retry policy belongs to
//! the caller. Transport errors and non-success statuses both surface as
//! `CatalogError::Remote` carrying the operation name, so the store never
//! sees reqwest types.

pub mod wire;

use std::time::Duration;

use async_trait::async_trait;
use cl_core::error::{CatalogError, Result};
use cl_core::models::{Movie, MovieDraft, Review, ReviewDraft};
use cl_core::traits::CatalogGateway;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use crate::wire::{MovieRecord, NewReviewBody, ReviewRecord};

/// Connection settings for the remote catalog service.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("cinelog/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

pub struct HttpCatalogGateway {
    client: Client,
    base_url: String,
}

impl HttpCatalogGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|err| CatalogError::remote("configure", err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds the multipart body shared by create and update. The poster is
    /// attached only when the draft carries one; the service keeps the prior
    /// poster when the part is absent.
    fn movie_form(op: &'static str, draft: &MovieDraft) -> Result<Form> {
        let mut form = Form::new()
            .text("title", draft.title.clone())
            .text("genre", draft.genres.join(", "))
            .text("year", draft.year.to_string())
            .text("rating", draft.rating.to_string())
            .text("synopsis", draft.synopsis.clone())
            .text("trailer", draft.trailer_url.clone());

        if let Some(poster) = &draft.poster {
            let part = Part::bytes(poster.bytes.clone())
                .file_name(poster.file_name.clone())
                .mime_str(&poster.content_type)
                .map_err(|err| CatalogError::remote(op, err.to_string()))?;
            form = form.part("poster", part);
        }
        Ok(form)
    }
}

fn transport(op: &'static str, err: reqwest::Error) -> CatalogError {
    CatalogError::remote(op, err.to_string())
}

/// Maps a non-success status (with whatever body the service attached) to a
/// typed failure.
async fn ensure_success(op: &'static str, response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(CatalogError::remote(op, format!("status {status}: {body}")))
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        const OP: &str = "list_movies";
        let response = self
            .client
            .get(self.url("/movies"))
            .send()
            .await
            .map_err(|err| transport(OP, err))?;
        let records: Vec<MovieRecord> = ensure_success(OP, response)
            .await?
            .json()
            .await
            .map_err(|err| transport(OP, err))?;
        debug!(count = records.len(), "fetched movie records");
        Ok(records.into_iter().map(Movie::from).collect())
    }

    async fn list_reviews(&self, movie_id: i64) -> Result<Vec<Review>> {
        const OP: &str = "list_reviews";
        let response = self
            .client
            .get(self.url(&format!("/movies/{movie_id}/reviews")))
            .send()
            .await
            .map_err(|err| transport(OP, err))?;
        let records: Vec<ReviewRecord> = ensure_success(OP, response)
            .await?
            .json()
            .await
            .map_err(|err| transport(OP, err))?;
        Ok(records.into_iter().map(Review::from).collect())
    }

    async fn list_all_reviews(&self) -> Result<Vec<Review>> {
        const OP: &str = "list_all_reviews";
        let response = self
            .client
            .get(self.url("/reviews"))
            .send()
            .await
            .map_err(|err| transport(OP, err))?;
        let records: Vec<ReviewRecord> = ensure_success(OP, response)
            .await?
            .json()
            .await
            .map_err(|err| transport(OP, err))?;
        Ok(records.into_iter().map(Review::from).collect())
    }

    async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie> {
        const OP: &str = "create_movie";
        let form = Self::movie_form(OP, draft)?;
        let response = self
            .client
            .post(self.url("/movies"))
            .multipart(form)
            .send()
            .await
            .map_err(|err| transport(OP, err))?;
        let record: MovieRecord = ensure_success(OP, response)
            .await?
            .json()
            .await
            .map_err(|err| transport(OP, err))?;
        Ok(Movie::from(record))
    }

    async fn update_movie(&self, movie_id: i64, draft: &MovieDraft) -> Result<Movie> {
        const OP: &str = "update_movie";
        let form = Self::movie_form(OP, draft)?;
        let response = self
            .client
            .put(self.url(&format!("/movies/{movie_id}")))
            .multipart(form)
            .send()
            .await
            .map_err(|err| transport(OP, err))?;
        let record: MovieRecord = ensure_success(OP, response)
            .await?
            .json()
            .await
            .map_err(|err| transport(OP, err))?;
        Ok(Movie::from(record))
    }

    async fn delete_movie(&self, movie_id: i64) -> Result<()> {
        const OP: &str = "delete_movie";
        let response = self
            .client
            .delete(self.url(&format!("/movies/{movie_id}")))
            .send()
            .await
            .map_err(|err| transport(OP, err))?;
        ensure_success(OP, response).await?;
        Ok(())
    }

    async fn record_view(&self, movie_id: i64) -> Result<Movie> {
        const OP: &str = "record_view";
        let response = self
            .client
            .put(self.url(&format!("/movies/{movie_id}/view")))
            .send()
            .await
            .map_err(|err| transport(OP, err))?;
        let record: MovieRecord = ensure_success(OP, response)
            .await?
            .json()
            .await
            .map_err(|err| transport(OP, err))?;
        Ok(Movie::from(record))
    }

    async fn create_review(&self, movie_id: i64, draft: &ReviewDraft) -> Result<Review> {
        const OP: &str = "create_review";
        let body = NewReviewBody {
            id_movies: movie_id,
            user_name: &draft.author_name,
            rating: draft.rating,
            comment: &draft.comment,
            date: draft.date,
        };
        let response = self
            .client
            .post(self.url(&format!("/movies/{movie_id}/reviews")))
            .json(&body)
            .send()
            .await
            .map_err(|err| transport(OP, err))?;
        let record: ReviewRecord = ensure_success(OP, response)
            .await?
            .json()
            .await
            .map_err(|err| transport(OP, err))?;
        Ok(Review::from(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GatewayConfig::new("http://localhost:3000/");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("cinelog/"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let gateway = HttpCatalogGateway::new(GatewayConfig::new("http://localhost:3000/")).unwrap();
        assert_eq!(gateway.url("/movies"), "http://localhost:3000/movies");
    }

    #[test]
    fn movie_form_rejects_malformed_content_type() {
        let draft = MovieDraft {
            title: "Dune".to_string(),
            poster: Some(cl_core::models::PosterUpload {
                bytes: vec![1, 2, 3],
                file_name: "poster.png".to_string(),
                content_type: "not a mime".to_string(),
            }),
            ..MovieDraft::default()
        };
        let err = HttpCatalogGateway::movie_form("create_movie", &draft).unwrap_err();
        assert!(matches!(err, CatalogError::Remote { op: "create_movie", .. }));
    }

    #[test]
    fn movie_form_accepts_posterless_draft() {
        let draft = MovieDraft {
            title: "Dune".to_string(),
            genres: vec!["Sci-Fi".to_string(), "Adventure".to_string()],
            ..MovieDraft::default()
        };
        assert!(HttpCatalogGateway::movie_form("update_movie", &draft).is_ok());
    }
}
