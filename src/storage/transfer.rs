//! JSON import and export
//!
//! Export writes a pretty-printed `quotes.json`. Import parses a JSON array of
//! quote-shaped objects; any parse failure rejects the whole file.

use crate::quotes::QuoteRepository;
use crate::storage::quotes::save_quotes;
use crate::storage::{get_data_dir, LocalStore, StorageError};
use crate::types::quote::Quote;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the exported file
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// Import/export errors
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Invalid JSON file")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Failed to serialize quotes: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No directory available for the export")]
    NoExportDir,
    #[error("Failed to save imported quotes: {0}")]
    Storage(#[from] StorageError),
}

/// Pretty-printed JSON array of the collection
pub fn export_json(repo: &QuoteRepository) -> Result<String, TransferError> {
    serde_json::to_string_pretty(repo).map_err(TransferError::Serialize)
}

/// Parse an import file's text
pub fn parse_import(json: &str) -> Result<Vec<Quote>, TransferError> {
    serde_json::from_str(json).map_err(TransferError::InvalidJson)
}

/// Parse `json` and append every quote to `repo`
///
/// On error `repo` is left untouched. Returns the number of imported quotes.
pub fn import_json(repo: &mut QuoteRepository, json: &str) -> Result<usize, TransferError> {
    let imported = parse_import(json)?;
    let count = imported.len();
    repo.extend(imported);
    tracing::info!("Imported {} quotes", count);
    Ok(count)
}

/// Import `json` into `repo` and persist the result
///
/// Nothing is written to `store` unless the whole file parsed.
pub fn import_and_persist(
    store: &LocalStore,
    repo: &mut QuoteRepository,
    json: &str,
) -> Result<usize, TransferError> {
    let count = import_json(repo, json)?;
    save_quotes(store, repo)?;
    Ok(count)
}

/// Directory exports are written to: the user's download folder, else the data dir
pub fn default_export_dir() -> Result<PathBuf, TransferError> {
    if let Some(dirs) = directories::UserDirs::new() {
        if let Some(downloads) = dirs.download_dir() {
            return Ok(downloads.to_path_buf());
        }
    }
    get_data_dir().map_err(|_| TransferError::NoExportDir)
}

/// Write the export file into `dir` and return its path
pub fn export_to_dir(repo: &QuoteRepository, dir: &Path) -> Result<PathBuf, TransferError> {
    let json = export_json(repo)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, json)?;
    tracing::info!("Exported {} quotes to {:?}", repo.len(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuoteRepository {
        QuoteRepository::from_quotes(vec![
            Quote::new("A", "X"),
            Quote::new("B \"quoted\"", "Y"),
        ])
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let repo = sample();
        let json = export_json(&repo).unwrap();
        assert!(json.contains('\n'), "export should be pretty-printed");

        let mut fresh = QuoteRepository::new();
        assert_eq!(import_json(&mut fresh, &json).unwrap(), 2);
        assert_eq!(fresh, repo);
    }

    #[test]
    fn test_import_appends_duplicates() {
        let mut repo = sample();
        let json = export_json(&repo.clone()).unwrap();
        import_json(&mut repo, &json).unwrap();
        assert_eq!(repo.len(), 4);
    }

    #[test]
    fn test_invalid_json_leaves_collection_unchanged() {
        let mut repo = sample();
        let err = import_json(&mut repo, "[{\"text\": \"A\",").unwrap_err();
        assert!(matches!(err, TransferError::InvalidJson(_)));
        assert_eq!(err.to_string(), "Invalid JSON file");
        assert_eq!(repo, sample());
    }

    #[test]
    fn test_invalid_import_keeps_persisted_state() {
        use crate::storage::quotes::{load_quotes, QUOTES_KEY};

        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let mut repo = sample();
        save_quotes(&store, &repo).unwrap();
        let stored_before = store.get(QUOTES_KEY).unwrap();

        let err = import_and_persist(&store, &mut repo, "not json at all").unwrap_err();
        assert!(matches!(err, TransferError::InvalidJson(_)));

        assert_eq!(repo, sample());
        assert_eq!(store.get(QUOTES_KEY).unwrap(), stored_before);
        assert_eq!(load_quotes(&store), sample());
    }

    #[test]
    fn test_import_and_persist_saves_merged_collection() {
        use crate::storage::quotes::load_quotes;

        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let mut repo = sample();

        let count = import_and_persist(&store, &mut repo, r#"[{"text":"C","category":"Z"}]"#).unwrap();
        assert_eq!(count, 1);
        assert_eq!(repo.len(), 3);
        assert_eq!(load_quotes(&store), repo);
    }

    #[test]
    fn test_non_array_is_rejected() {
        let mut repo = sample();
        assert!(import_json(&mut repo, r#"{"text":"A","category":"X"}"#).is_err());
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_export_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_to_dir(&sample(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "quotes.json");
        let written = fs::read_to_string(path).unwrap();
        assert_eq!(parse_import(&written).unwrap(), sample().quotes());
    }
}
