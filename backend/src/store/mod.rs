//! In-memory review store backed by a flat CSV file.
//!
//! The whole dataset is read once at startup. Every append rewrites the entire
//! file, so a successful submission is always visible on disk and to the next
//! listing. Store mutation and snapshot reads go through one `RwLock`, so
//! concurrent workers never observe a half-applied append.

mod csv_file;

use common::model::review::Review;
use log::warn;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read dataset {}: {source}", .path.display())]
    Read { path: PathBuf, source: csv::Error },

    #[error("failed to write dataset {}: {source}", .path.display())]
    Write { path: PathBuf, source: csv::Error },

    #[error("failed to replace dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("review {id} already exists in {}", .path.display())]
    DuplicateId { path: PathBuf, id: String },
}

/// Cheap to clone; clones share the same records and file.
#[derive(Clone)]
pub struct ReviewStore {
    path: Arc<PathBuf>,
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl ReviewStore {
    /// Reads the dataset at `path`. Fails if the file is missing, a column is
    /// absent or any row does not deserialize (including bad timestamps).
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let reviews = csv_file::read_reviews(&path)?;

        let mut seen = HashSet::with_capacity(reviews.len());
        for review in &reviews {
            if !seen.insert(review.review_id.as_str()) {
                warn!(
                    "Dataset {} contains duplicate ReviewId {}",
                    path.display(),
                    review.review_id
                );
            }
        }

        Ok(Self {
            path: Arc::new(path),
            reviews: Arc::new(RwLock::new(reviews)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of every record, in insertion order.
    pub async fn snapshot(&self) -> Vec<Review> {
        self.reviews.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.reviews.read().await.len()
    }

    #[cfg(test)]
    pub async fn contains_id(&self, review_id: &str) -> bool {
        self.reviews
            .read()
            .await
            .iter()
            .any(|r| r.review_id == review_id)
    }

    /// Appends `review` and rewrites the dataset.
    ///
    /// If the rewrite fails the record is dropped again, leaving memory and
    /// disk in agreement.
    pub async fn append(&self, review: Review) -> Result<(), StoreError> {
        let mut reviews = self.reviews.write().await;

        if reviews.iter().any(|r| r.review_id == review.review_id) {
            return Err(StoreError::DuplicateId {
                path: self.path.to_path_buf(),
                id: review.review_id,
            });
        }

        reviews.push(review);
        if let Err(e) = csv_file::write_reviews(&self.path, &reviews) {
            reviews.pop();
            return Err(e);
        }
        Ok(())
    }
}
