//! Whole-document persistence for the register's two JSON files.
//!
//! The register reads each file in full at startup and rewrites it in full
//! on every save; there is no incremental diffing. [`Store`] is the seam
//! that keeps that policy testable: production code uses [`JsonFile`],
//! tests use [`MemoryStore`] and can script a write failure
//! deterministically.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The document exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    /// The document could not be written.
    #[error("Failed to write {path}: {source}")]
    Write { path: String, source: io::Error },

    /// The document is not a well-formed array of the expected records.
    #[error("Malformed data in {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    /// The in-memory collection could not be encoded.
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: String,
        source: serde_json::Error,
    },
}

/// A whole-document text store.
pub trait Store: Send + 'static {
    /// Human-readable location, used in error messages.
    fn location(&self) -> &str;

    /// Reads the full document, or `None` if it has never been written.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replaces the full document.
    fn write(&self, contents: &str) -> Result<(), StorageError>;
}

/// A [`Store`] backed by one file on disk.
pub struct JsonFile {
    path: PathBuf,
    location: String,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl Store for JsonFile {
    fn location(&self) -> &str {
        &self.location
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                path: self.location.clone(),
                source: e,
            }),
        }
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        fs::write(&self.path, contents).map_err(|e| StorageError::Write {
            path: self.location.clone(),
            source: e,
        })
    }
}

/// An in-memory [`Store`] for tests.
///
/// Clones share the same document, so a test can keep one handle while the
/// actor under test owns another. [`MemoryStore::fail_next_write`] makes
/// exactly one upcoming write fail, which is how write-failure rollback is
/// exercised without touching the filesystem.
#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Default, Debug)]
struct MemoryInner {
    contents: Option<String>,
    fail_next_write: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        let store = Self::new();
        store.inner.lock().unwrap().contents = Some(contents.into());
        store
    }

    /// Makes the next `write` fail with a [`StorageError::Write`].
    pub fn fail_next_write(&self) {
        self.inner.lock().unwrap().fail_next_write = true;
    }

    /// Current document, as a test would inspect it.
    pub fn contents(&self) -> Option<String> {
        self.inner.lock().unwrap().contents.clone()
    }
}

impl Store for MemoryStore {
    fn location(&self) -> &str {
        "<memory>"
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.inner.lock().unwrap().contents.clone())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_next_write {
            inner.fail_next_write = false;
            return Err(StorageError::Write {
                path: "<memory>".to_string(),
                source: io::Error::other("simulated write failure"),
            });
        }
        inner.contents = Some(contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_file_reads_none_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFile::new(dir.path().join("products.json"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_json_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFile::new(dir.path().join("orders.json"));
        store.write("[]").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_store_fails_exactly_one_write() {
        let store = MemoryStore::with_contents("[]");

        store.fail_next_write();
        assert!(store.write("[1]").is_err());
        assert_eq!(store.contents().as_deref(), Some("[]"));

        store.write("[1]").unwrap();
        assert_eq!(store.contents().as_deref(), Some("[1]"));
    }
}
