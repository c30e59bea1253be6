use super::StoreError;
use common::model::review::Review;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const HEADER: [&str; 4] = ["Location", "ReviewBody", "ReviewId", "Timestamp"];

/// Reads every row of the dataset. Columns are matched by header name.
pub(super) fn read_reviews(path: &Path) -> Result<Vec<Review>, StoreError> {
    let read_err = |source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(read_err)?;

    reader
        .deserialize::<Review>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)
}

/// Rewrites the dataset with `reviews`.
///
/// Rows go to a temporary file next to `path` which is then renamed over it, so
/// a crash mid-write leaves the previous contents intact. The existing file's
/// permissions carry over to the replacement.
pub(super) fn write_reviews(path: &Path, reviews: &[Review]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(io_err)?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(tmp);
    writer.write_record(HEADER).map_err(write_err)?;
    for review in reviews {
        writer.serialize(review).map_err(write_err)?;
    }
    writer.flush().map_err(io_err)?;

    let mut tmp = writer
        .into_inner()
        .map_err(|e| io_err(io::Error::new(e.error().kind(), e.error().to_string())))?;
    tmp.flush().map_err(io_err)?;
    // The rename would otherwise leave the dataset with the temp file's mode.
    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(io_err)?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
