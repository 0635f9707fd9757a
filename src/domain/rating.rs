//! Review rating aggregation.
//!
//! Folds the reviews of a single hotel into one badge-ready score. Star ratings
//! (1–5) are averaged, rescaled to a 10-point display score and mapped onto a
//! qualitative label.
//!
//! Callers select the reviews of one hotel before aggregating; nothing here
//! filters by hotel.

use serde::Serialize;

use crate::domain::entities::Review;

/// Qualitative tier derived from a display score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatingLabel {
    #[serde(rename = "Exceptional")]
    Exceptional,
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Average")]
    Average,
}

impl RatingLabel {
    /// Maps a 10-point display score to its tier. Thresholds are inclusive.
    pub fn from_score(display_score: f64) -> Self {
        if display_score >= 9.5 {
            Self::Exceptional
        } else if display_score >= 8.5 {
            Self::Excellent
        } else if display_score >= 7.5 {
            Self::VeryGood
        } else if display_score >= 6.5 {
            Self::Good
        } else {
            Self::Average
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exceptional => "Exceptional",
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Average => "Average",
        }
    }
}

impl std::fmt::Display for RatingLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate rating of one hotel. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateRating {
    /// Unrounded mean of the star ratings.
    pub average_stars: f64,
    /// Mean rescaled to 10 points, rounded to one decimal.
    pub display_score: f64,
    pub label: RatingLabel,
    pub count: usize,
}

/// Aggregates star ratings into a display score.
///
/// Returns `None` for an empty input: "no reviews yet" is a distinct state and is
/// never reported as a zero score.
///
/// # Examples
///
/// ```
/// use hotel_stays::domain::rating::{aggregate_stars, RatingLabel};
///
/// let rating = aggregate_stars(&[5, 5, 4]).unwrap();
/// assert_eq!(rating.display_score, 9.3);
/// assert_eq!(rating.label, RatingLabel::Excellent);
/// assert!(aggregate_stars(&[]).is_none());
/// ```
pub fn aggregate_stars(stars: &[u8]) -> Option<AggregateRating> {
    if stars.is_empty() {
        return None;
    }

    let count = stars.len();
    let sum: u64 = stars.iter().map(|&s| u64::from(s)).sum();
    let average_stars = sum as f64 / count as f64;

    // (avg / 5) * 10 == avg * 2; computed from the integer sum to keep one rounding step.
    let tenths = (sum as f64 * 20.0 / count as f64).round();
    let display_score = tenths / 10.0;

    Some(AggregateRating {
        average_stars,
        display_score,
        label: RatingLabel::from_score(display_score),
        count,
    })
}

/// Aggregates a hotel's reviews. See [`aggregate_stars`].
pub fn aggregate(reviews: &[Review]) -> Option<AggregateRating> {
    let stars: Vec<u8> = reviews.iter().map(|r| r.rating).collect();
    aggregate_stars(&stars)
}

/// Returns a copy of `reviews` with the `helpful` counter of `review_id` incremented.
///
/// An unknown id yields an unchanged copy.
pub fn record_helpful_vote(reviews: &[Review], review_id: u64) -> Vec<Review> {
    reviews
        .iter()
        .map(|r| {
            if r.id == review_id {
                Review {
                    helpful: r.helpful.saturating_add(1),
                    ..r.clone()
                }
            } else {
                r.clone()
            }
        })
        .collect()
}
