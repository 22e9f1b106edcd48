//! Record sources.
//!
//! A [`RecordSource`] supplies the full collection a list screen queries.
//! The engine never fetches anything itself; callers fetch, then query.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Errors that can occur while fetching records.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The backing file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON array of the expected records.
    #[error("Failed to decode records from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The records could not be encoded for saving.
    #[error("Failed to encode records for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies a collection of records.
pub trait RecordSource<T> {
    /// Short description for logs.
    fn name(&self) -> String;

    /// Fetches every record.
    fn fetch_records(&self) -> Result<Vec<T>, SourceError>;
}

/// In-memory records, such as the built-in fixtures.
#[derive(Debug, Clone)]
pub struct StaticSource<T> {
    records: Vec<T>,
}

impl<T> StaticSource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T: Clone> RecordSource<T> for StaticSource<T> {
    fn name(&self) -> String {
        "built-in records".to_string()
    }

    fn fetch_records(&self) -> Result<Vec<T>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Records stored as a JSON array on disk.
///
/// The file holds what the admin API would return for a list endpoint.
#[derive(Debug, Clone)]
pub struct JsonFileSource<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileSource<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize> JsonFileSource<T> {
    /// Replaces the file contents with `records` as a pretty-printed array.
    pub fn store_records(&self, records: &[T]) -> Result<(), SourceError> {
        let json = serde_json::to_string_pretty(records).map_err(|source| SourceError::Encode {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| SourceError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "stored records");
        Ok(())
    }
}

impl<T: DeserializeOwned> RecordSource<T> for JsonFileSource<T> {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_records(&self) -> Result<Vec<T>, SourceError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| SourceError::Decode {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }
}
