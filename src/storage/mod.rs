//! Persistent storage
//!
//! This module handles all local persistence: the key-value store backing the
//! quote collection and filter, application settings, and JSON import/export.

pub mod quotes;
pub mod settings;
pub mod transfer;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine the application data directory")]
    NoDataDir,
}

/// Get the application data directory
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "QuoteDeck", "QuoteDeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}

/// Simple key-value store backed by one file per key
///
/// Access is not synchronised; the application only touches the store from
/// the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `root`. The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open the store in the default application data directory
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(get_data_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Read the value stored under `key`, if any
    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}
