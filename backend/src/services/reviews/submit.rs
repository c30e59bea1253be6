use crate::error::ReviewError;
use crate::state::AppState;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use chrono::{Local, NaiveDateTime, Timelike};
use common::model::review::{is_valid_location, Review};
use common::requests::NewReviewForm;
use futures_util::StreamExt;
use log::info;
use uuid::Uuid;

/// `POST`: stores a new review from a form-encoded body and echoes it back
/// with `201 Created`.
pub(crate) async fn process(
    payload: web::Payload,
    state: &AppState,
) -> Result<HttpResponse, ReviewError> {
    let body = read_body(payload, state.max_body_bytes).await?;
    let review = submit_review(&body, state).await?;
    Ok(HttpResponse::Created()
        .content_type(ContentType::json())
        .body(serde_json::to_vec_pretty(&review)?))
}

pub async fn submit_review(body: &[u8], state: &AppState) -> Result<Review, ReviewError> {
    let (location, review_body) = validate(parse_form(body)?)?;

    let review = Review {
        location,
        review_body,
        review_id: Uuid::new_v4().to_string(),
        timestamp: current_timestamp(),
    };
    state.store.append(review.clone()).await?;

    info!(
        "Stored review {} for {} ({} total)",
        review.review_id,
        review.location,
        state.store.len().await
    );
    Ok(review)
}

/// Collects the request body, failing once it grows past `limit` bytes.
async fn read_body(mut payload: web::Payload, limit: usize) -> Result<Vec<u8>, ReviewError> {
    let mut body = Vec::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| ReviewError::InvalidForm(e.to_string()))?;
        if body.len() + chunk.len() > limit {
            return Err(ReviewError::PayloadTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn parse_form(body: &[u8]) -> Result<NewReviewForm, ReviewError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| ReviewError::InvalidForm(format!("body is not valid UTF-8: {}", e)))?;
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(text).map_err(|e| ReviewError::InvalidForm(e.to_string()))?;
    Ok(NewReviewForm::from_pairs(&pairs))
}

/// Returns `(location, review_body)` once both are present and the location
/// is allowed.
fn validate(form: NewReviewForm) -> Result<(String, String), ReviewError> {
    let (Some(location), Some(review_body)) = (form.location, form.review_body) else {
        return Err(ReviewError::MissingFields);
    };
    if !is_valid_location(&location) {
        return Err(ReviewError::InvalidLocation);
    }
    Ok((location, review_body))
}

/// Server-local time truncated to whole seconds.
fn current_timestamp() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_decodes_plus_and_percent_escapes() {
        let form = parse_form(b"Location=San+Diego%2C+California&ReviewBody=Great+stay%21").unwrap();
        assert_eq!(form.location.as_deref(), Some("San Diego, California"));
        assert_eq!(form.review_body.as_deref(), Some("Great stay!"));
    }

    #[test]
    fn parse_form_rejects_invalid_utf8() {
        let err = parse_form(&[0x4c, 0x3d, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ReviewError::InvalidForm(_)));
    }

    #[test]
    fn validate_requires_both_fields() {
        let missing_body = NewReviewForm {
            location: Some("New York, New York".to_string()),
            review_body: None,
        };
        assert!(matches!(validate(missing_body), Err(ReviewError::MissingFields)));
        assert!(matches!(
            validate(NewReviewForm::default()),
            Err(ReviewError::MissingFields)
        ));
    }

    #[test]
    fn validate_checks_missing_fields_before_location() {
        let form = NewReviewForm {
            location: Some("Chicago, Illinois".to_string()),
            review_body: None,
        };
        assert!(matches!(validate(form), Err(ReviewError::MissingFields)));
    }

    #[test]
    fn validate_rejects_unknown_location() {
        let form = NewReviewForm {
            location: Some("Chicago, Illinois".to_string()),
            review_body: Some("test".to_string()),
        };
        assert!(matches!(validate(form), Err(ReviewError::InvalidLocation)));
    }

    #[test]
    fn current_timestamp_has_no_fractional_seconds() {
        assert_eq!(current_timestamp().nanosecond(), 0);
    }
}
