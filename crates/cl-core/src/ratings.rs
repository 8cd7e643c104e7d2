//! # Rating Aggregator
//!
//! Pure derivation of a per-movie average rating from the review
//! collection. Like the projection, this is recomputed on every read.

use crate::models::Review;

/// Arithmetic mean of the ratings of all reviews for `movie_id`, rounded to
/// one decimal place (half away from zero).
///
/// Returns `0.0` when no review matches. By caller convention `0.0` means
/// "no aggregate" — whether to fall back to the movie's intrinsic rating is
/// a presentation decision, not made here.
pub fn average_rating(reviews: &[Review], movie_id: i64) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for review in reviews.iter().filter(|r| r.movie_id == movie_id) {
        sum += review.rating;
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    let mean = sum / f64::from(count);
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn review(id: i64, movie_id: i64, rating: f64) -> Review {
        Review {
            id,
            movie_id,
            author_name: "reviewer".to_string(),
            rating,
            comment: "fine".to_string(),
            date: Utc::now(),
        }
    }

    #[test]
    fn zero_when_no_review_matches() {
        let reviews = vec![review(1, 7, 9.0)];
        assert_eq!(average_rating(&reviews, 42), 0.0);
        assert_eq!(average_rating(&[], 42), 0.0);
    }

    #[test]
    fn mean_of_matching_reviews_only() {
        let reviews = vec![review(1, 1, 9.0), review(2, 1, 8.0), review(3, 2, 1.0)];
        assert_eq!(average_rating(&reviews, 1), 8.5);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 7.0 + 8.0 + 8.0 = 23.0, mean 7.666... -> 7.7
        let reviews = vec![review(1, 5, 7.0), review(2, 5, 8.0), review(3, 5, 8.0)];
        assert_eq!(average_rating(&reviews, 5), 7.7);

        // mean 8.25 -> 8.3 (half rounds up, not to even)
        let reviews = vec![review(1, 6, 8.0), review(2, 6, 8.5)];
        assert_eq!(average_rating(&reviews, 6), 8.3);
    }

    #[test]
    fn order_independent() {
        let mut reviews = vec![review(1, 9, 6.5), review(2, 9, 7.25), review(3, 9, 9.75)];
        let forward = average_rating(&reviews, 9);
        reviews.reverse();
        assert_eq!(average_rating(&reviews, 9), forward);
    }
}
