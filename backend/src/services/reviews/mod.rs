//! # Review Service Module
//!
//! Every request, whatever its path, is handled by [`dispatch`], which is
//! registered as the application's default service in `main.rs`. The method
//! selects the branch:
//!
//! - `GET`: `list` parses `location`, `start_date` and `end_date` from the
//!   query string, runs `query::rank_reviews` over a store snapshot and answers
//!   `200 OK` with the ranked reviews, each carrying a `sentiment` object.
//! - `POST`: `submit` reads `Location` and `ReviewBody` from a form-encoded
//!   body, appends the new review to the store and answers `201 Created` with
//!   the stored record.
//! - anything else: `405 Method Not Allowed`.
//!
//! The `POST` body is streamed here rather than through actix's `Bytes`
//! extractor, so an oversized body is reported as JSON like every other error.
//!
//! Failures from either branch are converted here into a JSON
//! `{"error": "..."}` response with the status from `ReviewError`.

mod list;
pub mod query;
mod submit;

use crate::error::ReviewError;
use crate::state::AppState;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use log::{error, warn};

pub async fn dispatch(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> HttpResponse {
    let result = match *req.method() {
        Method::GET => list::process(req.query_string(), &state).await,
        Method::POST => submit::process(payload, &state).await,
        ref other => Err(ReviewError::MethodNotAllowed(other.clone())),
    };

    result.unwrap_or_else(|e| {
        if e.status_code().is_server_error() {
            error!("{} {} failed: {}", req.method(), req.path(), e);
        } else {
            warn!("{} {} rejected: {}", req.method(), req.path(), e);
        }
        e.error_response()
    })
}
