use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of the `Timestamp` column, both on disk and on the wire.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format accepted for the `start_date` / `end_date` query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Locations a new review may be submitted for.
pub const VALID_LOCATIONS: [&str; 2] = ["San Diego, California", "New York, New York"];

pub fn is_valid_location(location: &str) -> bool {
    VALID_LOCATIONS.contains(&location)
}

/// A single customer review as stored in the dataset.
///
/// Field names are PascalCase on the wire and in the CSV header
/// (`Location,ReviewBody,ReviewId,Timestamp`), and serialize in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Review {
    pub location: String,
    pub review_body: String,
    /// UUID v4 assigned when the review was submitted.
    pub review_id: String,
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

/// Polarity scores for a piece of text.
///
/// `compound` is the normalized aggregate in `[-1.0, 1.0]`; the other three are
/// the proportions of negative, neutral and positive content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// A review with its sentiment inlined, as returned by the listing endpoint.
///
/// Sentiment is computed per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: Sentiment,
}

pub mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(|e| {
            serde::de::Error::custom(format!("invalid Timestamp '{}': {}", raw, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Review {
        Review {
            location: "New York, New York".to_string(),
            review_body: "Lovely room, noisy street.".to_string(),
            review_id: "0d6c8f0e-2a53-4a57-9f57-6a0b1f3c9d21".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(7, 5, 0)
                .unwrap(),
        }
    }

    #[test]
    fn allow_list_is_exact() {
        assert!(is_valid_location("San Diego, California"));
        assert!(is_valid_location("New York, New York"));
        assert!(!is_valid_location("san diego, california"));
        assert!(!is_valid_location("Chicago, Illinois"));
    }

    #[test]
    fn review_serializes_with_pascal_case_fields_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"Location":"New York, New York","ReviewBody":"Lovely room, noisy street.","ReviewId":"0d6c8f0e-2a53-4a57-9f57-6a0b1f3c9d21","Timestamp":"2024-03-09 07:05:00"}"#
        );
    }

    #[test]
    fn scored_review_inlines_sentiment_after_record_fields() {
        let scored = ScoredReview {
            review: sample(),
            sentiment: Sentiment { neg: 0.1, neu: 0.6, pos: 0.3, compound: 0.5 },
        };
        let json = serde_json::to_string(&scored).unwrap();
        assert!(json.ends_with(
            r#""Timestamp":"2024-03-09 07:05:00","sentiment":{"neg":0.1,"neu":0.6,"pos":0.3,"compound":0.5}}"#
        ));
    }

    #[test]
    fn timestamp_rejects_other_formats() {
        let bad = r#"{"Location":"x","ReviewBody":"y","ReviewId":"z","Timestamp":"2024-03-09T07:05:00"}"#;
        assert!(serde_json::from_str::<Review>(bad).is_err());
    }
}
