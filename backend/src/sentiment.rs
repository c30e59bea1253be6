//! Sentiment scoring.
//!
//! The service only needs "text in, polarity scores out", so the analyzer sits
//! behind `SentimentScorer`. Production uses VADER; tests plug in a fixed table.

use common::model::review::Sentiment;
use vader_sentiment::SentimentIntensityAnalyzer;

pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Sentiment;
}

/// VADER lexicon/rule based scorer.
///
/// Scores are rounded the same way the reference VADER implementation reports
/// them: proportions to 3 decimals, compound to 4.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Sentiment {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        Sentiment {
            neg: round_to(get("neg"), 3),
            neu: round_to(get("neu"), 3),
            pos: round_to(get("pos"), 3),
            compound: round_to(get("compound"), 4).clamp(-1.0, 1.0),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
