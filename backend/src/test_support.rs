//! Shared fixtures for unit tests.

use crate::sentiment::SentimentScorer;
use chrono::NaiveDateTime;
use common::model::review::{Review, Sentiment, TIMESTAMP_FORMAT};
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

/// `(Location, ReviewBody, ReviewId, Timestamp)`
pub type Row<'a> = (&'a str, &'a str, &'a str, &'a str);

pub fn review(location: &str, body: &str, id: &str, timestamp: &str) -> Review {
    Review {
        location: location.to_string(),
        review_body: body.to_string(),
        review_id: id.to_string(),
        timestamp: NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).unwrap(),
    }
}

/// Writes `rows` as a CSV dataset inside a fresh temp dir. Keep the `TempDir`
/// alive for as long as the file is needed.
pub fn write_dataset(rows: &[Row]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reviews.csv");

    let mut writer = csv::Writer::from_path(&path).unwrap();
    writer
        .write_record(["Location", "ReviewBody", "ReviewId", "Timestamp"])
        .unwrap();
    for (location, body, id, timestamp) in rows {
        writer.write_record([location, body, id, timestamp]).unwrap();
    }
    writer.flush().unwrap();

    (dir, path)
}

/// Scores review bodies from a lookup table; unknown text is neutral.
#[derive(Default)]
pub struct FixedScorer {
    compounds: HashMap<String, f64>,
}

impl FixedScorer {
    pub fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            compounds: entries
                .iter()
                .map(|(text, compound)| (text.to_string(), *compound))
                .collect(),
        }
    }
}

impl SentimentScorer for FixedScorer {
    fn score(&self, text: &str) -> Sentiment {
        let compound = self.compounds.get(text).copied().unwrap_or(0.0);
        Sentiment {
            neg: if compound < 0.0 { -compound } else { 0.0 },
            neu: 1.0 - compound.abs(),
            pos: if compound > 0.0 { compound } else { 0.0 },
            compound,
        }
    }
}
