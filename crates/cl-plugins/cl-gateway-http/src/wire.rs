//! Wire records exchanged with the persistence service.
//!
//! Field names here are the collaborator's, not ours. Conversion into the
//! core entities happens immediately on decode — this is the single
//! ingestion boundary where the delimited `genre` string becomes the
//! canonical genre list. Nothing past this module branches on the wire
//! representation.

use chrono::{DateTime, Utc};
use cl_core::models::{normalize_genres, Movie, Review};
use serde::{Deserialize, Serialize};

/// A movie as the service returns it.
#[derive(Debug, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    /// Comma-delimited, e.g. `"Sci-Fi, Thriller"`.
    #[serde(default)]
    pub genre: String,
    pub year: i32,
    pub rating: f64,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub trailer: String,
    /// Absent or null on records that have never been viewed.
    #[serde(default)]
    pub view_count: Option<u64>,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Movie {
            id: record.id,
            title: record.title,
            genres: normalize_genres(&record.genre),
            year: record.year,
            rating: record.rating,
            synopsis: record.synopsis,
            poster_url: record.poster,
            trailer_url: record.trailer,
            view_count: record.view_count.unwrap_or(0),
        }
    }
}

/// A review as the service returns it.
#[derive(Debug, Deserialize)]
pub struct ReviewRecord {
    pub id: i64,
    pub id_movies: i64,
    pub user_name: String,
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    pub date: DateTime<Utc>,
}

impl From<ReviewRecord> for Review {
    fn from(record: ReviewRecord) -> Self {
        Review {
            id: record.id,
            movie_id: record.id_movies,
            author_name: record.user_name,
            rating: record.rating,
            comment: record.comment,
            date: record.date,
        }
    }
}

/// Body for `POST /movies/{id}/reviews`.
#[derive(Debug, Serialize)]
pub struct NewReviewBody<'a> {
    pub id_movies: i64,
    pub user_name: &'a str,
    pub rating: f64,
    pub comment: &'a str,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_record_normalizes_genre_string() {
        let record: MovieRecord = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Inception",
                "genre": "Sci-Fi, Thriller,Sci-Fi",
                "year": 2010,
                "rating": 8.8,
                "synopsis": "A thief steals secrets through dreams.",
                "poster": "/posters/inception.jpg",
                "trailer": "https://example.test/t/7",
                "view_count": 42
            }"#,
        )
        .unwrap();

        let movie = Movie::from(record);
        assert_eq!(movie.id, 7);
        assert_eq!(movie.genres, vec!["Sci-Fi", "Thriller"]);
        assert_eq!(movie.poster_url, "/posters/inception.jpg");
        assert_eq!(movie.view_count, 42);
    }

    #[test]
    fn movie_record_tolerates_missing_optional_fields() {
        let record: MovieRecord = serde_json::from_str(
            r#"{"id": 1, "title": "Bare", "year": 1999, "rating": 5.0}"#,
        )
        .unwrap();
        let movie = Movie::from(record);
        assert!(movie.genres.is_empty());
        assert_eq!(movie.view_count, 0, "never-viewed records count as zero");
    }

    #[test]
    fn movie_record_tolerates_null_view_count() {
        let record: MovieRecord = serde_json::from_str(
            r#"{"id": 2, "title": "Unseen", "year": 2003, "rating": 6.0, "view_count": null}"#,
        )
        .unwrap();
        assert_eq!(Movie::from(record).view_count, 0);
    }

    #[test]
    fn review_record_maps_wire_names() {
        let record: ReviewRecord = serde_json::from_str(
            r#"{
                "id": 3,
                "id_movies": 7,
                "user_name": "ada",
                "rating": 9.5,
                "comment": "stunning",
                "date": "2024-05-01T12:30:00Z"
            }"#,
        )
        .unwrap();

        let review = Review::from(record);
        assert_eq!(review.movie_id, 7);
        assert_eq!(review.author_name, "ada");
        assert_eq!(review.rating, 9.5);
    }

    #[test]
    fn new_review_body_serializes_wire_names() {
        let body = NewReviewBody {
            id_movies: 7,
            user_name: "ada",
            rating: 9.5,
            comment: "stunning",
            date: "2024-05-01T12:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["id_movies"], 7);
        assert_eq!(json["user_name"], "ada");
        assert!(json.get("author_name").is_none());
    }
}
