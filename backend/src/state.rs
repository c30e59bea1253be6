use crate::sentiment::SentimentScorer;
use crate::store::ReviewStore;
use std::sync::Arc;

/// Largest request body the write path accepts unless configured otherwise.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Shared application state, built once in `main.rs` and handed to every
/// worker as `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub store: ReviewStore,
    pub scorer: Arc<dyn SentimentScorer>,
    /// Upper bound for a `POST` body, in bytes.
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(store: ReviewStore, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self {
            store,
            scorer,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
