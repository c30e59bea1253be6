//! Filtering and ranking of reviews for the listing endpoint.

use crate::error::ReviewError;
use crate::sentiment::SentimentScorer;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use common::model::review::{Review, ScoredReview, DATE_FORMAT};
use common::requests::ReviewQuery;
use rayon::prelude::*;

/// Parsed listing filters. Absent fields do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub location: Option<String>,
    /// Inclusive lower bound, midnight of `start_date`.
    pub start: Option<NaiveDateTime>,
    /// Inclusive upper bound, midnight of `end_date`. Later times on that day
    /// fall outside the range.
    pub end: Option<NaiveDateTime>,
}

impl ReviewFilter {
    pub fn from_query(query: &ReviewQuery) -> Result<Self, ReviewError> {
        Ok(Self {
            location: query.location.clone(),
            start: query
                .start_date
                .as_deref()
                .map(|v| parse_midnight("start_date", v))
                .transpose()?,
            end: query
                .end_date
                .as_deref()
                .map(|v| parse_midnight("end_date", v))
                .transpose()?,
        })
    }

    pub fn matches(&self, review: &Review) -> bool {
        if let Some(location) = &self.location {
            if &review.location != location {
                return false;
            }
        }
        if let Some(start) = self.start {
            if review.timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if review.timestamp > end {
                return false;
            }
        }
        true
    }
}

fn parse_midnight(param: &'static str, value: &str) -> Result<NaiveDateTime, ReviewError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::default()))
        .map_err(|_| ReviewError::InvalidDate {
            param,
            value: value.to_string(),
        })
}

/// Keeps the reviews matching `filter`, scores them and orders them by
/// compound sentiment, highest first. Equal scores keep their input order.
pub fn rank_reviews(
    reviews: Vec<Review>,
    filter: &ReviewFilter,
    scorer: &dyn SentimentScorer,
) -> Vec<ScoredReview> {
    let survivors: Vec<Review> = reviews.into_iter().filter(|r| filter.matches(r)).collect();

    // Indexed collect preserves input order.
    let mut scored: Vec<ScoredReview> = survivors
        .into_par_iter()
        .map(|review| {
            let sentiment = scorer.score(&review.review_body);
            ScoredReview { review, sentiment }
        })
        .collect();

    sort_by_sentiment(&mut scored);
    scored
}

/// Stable sort, descending by compound score.
pub fn sort_by_sentiment(reviews: &mut [ScoredReview]) {
    reviews.sort_by(|a, b| b.sentiment.compound.total_cmp(&a.sentiment.compound));
}
