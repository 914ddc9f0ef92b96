//! Settings storage
//!
//! Manages persistence of the remote sync configuration.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default remote "list items" / "create item" endpoint
pub const DEFAULT_REMOTE_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Endpoint the sync cycle reads remote quotes from
    #[serde(default = "default_remote_url")]
    pub remote_url: String,
    /// Endpoint local quotes are pushed to
    #[serde(default = "default_remote_url")]
    pub push_url: String,
    /// Number of remote items mapped into quotes per cycle
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Per-request timeout for remote calls
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Run the periodic sync at all
    #[serde(default = "default_sync_enabled")]
    pub sync_enabled: bool,
}

fn default_remote_url() -> String {
    DEFAULT_REMOTE_URL.to_string()
}

fn default_batch_size() -> usize {
    5
}

fn default_request_timeout() -> u64 {
    15
}

fn default_sync_enabled() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            remote_url: default_remote_url(),
            push_url: default_remote_url(),
            batch_size: default_batch_size(),
            request_timeout_secs: default_request_timeout(),
            sync_enabled: default_sync_enabled(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Ensures all parameters are within acceptable ranges.
    pub fn validate(&mut self) {
        if self.remote_url.trim().is_empty() {
            self.remote_url = default_remote_url();
        }
        if self.push_url.trim().is_empty() {
            self.push_url = self.remote_url.clone();
        }
        self.batch_size = self.batch_size.clamp(1, 100);
        self.request_timeout_secs = self.request_timeout_secs.clamp(1, 300);
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from the default data directory
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load and validate settings from `path`
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to the default data directory
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}

/// Save settings to `path`
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.remote_url, DEFAULT_REMOTE_URL);
        assert_eq!(settings.push_url, DEFAULT_REMOTE_URL);
        assert_eq!(settings.batch_size, 5);
        assert!(settings.sync_enabled);
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        settings.batch_size = 0;
        settings.request_timeout_secs = 10_000;
        settings.remote_url = "  ".to_string();
        settings.push_url = String::new();
        settings.validate();

        assert_eq!(settings.batch_size, 1);
        assert_eq!(settings.request_timeout_secs, 300);
        assert_eq!(settings.remote_url, DEFAULT_REMOTE_URL);
        assert_eq!(settings.push_url, DEFAULT_REMOTE_URL);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"batch_size": 3}"#).unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.batch_size, 3);
        assert_eq!(settings.remote_url, DEFAULT_REMOTE_URL);
    }

    #[test]
    fn test_settings_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("settings.json");
        let mut settings = AppSettings::default();
        settings.sync_enabled = false;

        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_edited_urls_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = AppSettings::default();
        settings.remote_url = "http://localhost:8080/items".to_string();
        settings.push_url = String::new();

        save_settings_to(&path, &settings).unwrap();
        let loaded = load_settings_from(&path).unwrap();

        assert_eq!(loaded.remote_url, "http://localhost:8080/items");
        assert_eq!(loaded.push_url, "http://localhost:8080/items");
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, AppSettings::default());
    }
}
