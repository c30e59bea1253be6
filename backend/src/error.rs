//! Request-path error taxonomy.
//!
//! Every failure raised while handling a request ends up as a `ReviewError`, and
//! the dispatcher turns it into a JSON `{"error": "..."}` response through the
//! `ResponseError` impl below. Client mistakes map to `400`, an oversized body
//! to `413`, an unsupported method to `405`, and anything else to `500` with the message prefixed by
//! `An unexpected error occurred: `.

use crate::store::StoreError;
use actix_web::http::{header, Method, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Location and ReviewBody are required")]
    MissingFields,

    #[error("Invalid location")]
    InvalidLocation,

    #[error("Invalid {param} '{value}': expected YYYY-MM-DD")]
    InvalidDate { param: &'static str, value: String },

    /// Query string or body could not be decoded as form data.
    #[error("Malformed request: {0}")]
    InvalidForm(String),

    #[error("Request body exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error("Method {0} not allowed")]
    MethodNotAllowed(Method),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ReviewError {
    /// Text placed in the `error` field of the response body.
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            format!("An unexpected error occurred: {}", self)
        } else {
            self.to_string()
        }
    }
}

impl ResponseError for ReviewError {
    fn status_code(&self) -> StatusCode {
        match self {
            ReviewError::MissingFields
            | ReviewError::InvalidLocation
            | ReviewError::InvalidDate { .. }
            | ReviewError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            ReviewError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ReviewError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ReviewError::Store(_) | ReviewError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let ReviewError::MethodNotAllowed(_) = self {
            builder.insert_header((header::ALLOW, "GET, POST"));
        }
        builder.json(json!({ "error": self.public_message() }))
    }
}
