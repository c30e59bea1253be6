//! Parameters extracted from incoming requests.
//!
//! Both the listing query string and the submission body are
//! `application/x-www-form-urlencoded`. Lookups follow the usual form semantics:
//! a key with an empty value counts as absent, and when a key repeats the first
//! non-empty value wins.

/// Decoded `key=value` pairs, in the order they appeared.
pub type FormPairs = [(String, String)];

fn first_value(pairs: &FormPairs, key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.clone())
}

/// Filters for `GET /`. Dates are kept raw here and parsed by the service so a
/// malformed value can be reported back to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReviewQuery {
    pub fn from_pairs(pairs: &FormPairs) -> Self {
        Self {
            location: first_value(pairs, "location"),
            start_date: first_value(pairs, "start_date"),
            end_date: first_value(pairs, "end_date"),
        }
    }
}

/// Body of `POST /`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewReviewForm {
    pub location: Option<String>,
    pub review_body: Option<String>,
}

impl NewReviewForm {
    pub fn from_pairs(pairs: &FormPairs) -> Self {
        Self {
            location: first_value(pairs, "Location"),
            review_body: first_value(pairs, "ReviewBody"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn blank_values_are_treated_as_missing() {
        let form = NewReviewForm::from_pairs(&pairs(&[("Location", ""), ("ReviewBody", "ok")]));
        assert_eq!(form.location, None);
        assert_eq!(form.review_body.as_deref(), Some("ok"));
    }

    #[test]
    fn first_non_blank_value_wins() {
        let query = ReviewQuery::from_pairs(&pairs(&[
            ("location", ""),
            ("location", "New York, New York"),
            ("location", "San Diego, California"),
        ]));
        assert_eq!(query.location.as_deref(), Some("New York, New York"));
        assert_eq!(query.start_date, None);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let query = ReviewQuery::from_pairs(&pairs(&[("Location", "New York, New York")]));
        assert_eq!(query, ReviewQuery::default());
    }
}
