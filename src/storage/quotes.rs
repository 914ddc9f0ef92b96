//! Quote persistence
//!
//! Reads and writes the quote collection and the last selected category.

use crate::quotes::{CategoryFilter, QuoteRepository};
use crate::storage::{LocalStore, StorageError};
use crate::types::quote::Quote;

/// Key holding the JSON-serialized quote collection
pub const QUOTES_KEY: &str = "quotes.json";

/// Key holding the last selected category filter
pub const FILTER_KEY: &str = "lastCategory";

/// Collection used when nothing has been persisted yet
pub fn default_quotes() -> QuoteRepository {
    QuoteRepository::from_quotes(vec![
        Quote::new(
            "The best way to get started is to quit talking and begin doing.",
            "Motivation",
        ),
        Quote::new(
            "Don't let yesterday take up too much of today.",
            "Inspiration",
        ),
    ])
}

/// Load quotes from the store
///
/// Returns the default collection if nothing is stored or the stored value is corrupted
pub fn load_quotes(store: &LocalStore) -> QuoteRepository {
    match load_quotes_internal(store) {
        Ok(Some(repo)) => repo,
        Ok(None) => {
            tracing::info!("No stored quotes, using defaults");
            default_quotes()
        }
        Err(e) => {
            tracing::warn!("Failed to load quotes, using defaults: {}", e);
            default_quotes()
        }
    }
}

fn load_quotes_internal(store: &LocalStore) -> Result<Option<QuoteRepository>, StorageError> {
    let Some(json) = store.get(QUOTES_KEY)? else {
        return Ok(None);
    };
    let repo: QuoteRepository = serde_json::from_str(&json)?;
    tracing::debug!("Loaded {} quotes from disk", repo.len());
    Ok(Some(repo))
}

/// Persist the whole collection
pub fn save_quotes(store: &LocalStore, repo: &QuoteRepository) -> Result<(), StorageError> {
    let json = serde_json::to_string(repo)?;
    store.set(QUOTES_KEY, &json)?;
    tracing::debug!("Saved {} quotes to disk", repo.len());
    Ok(())
}

/// Load the last selected filter, `All` if none was stored
pub fn load_filter(store: &LocalStore) -> CategoryFilter {
    match store.get(FILTER_KEY) {
        Ok(Some(value)) => CategoryFilter::parse(value.trim()),
        Ok(None) => CategoryFilter::All,
        Err(e) => {
            tracing::warn!("Failed to load last category, showing all: {}", e);
            CategoryFilter::All
        }
    }
}

/// Persist the selected filter
pub fn save_filter(store: &LocalStore, filter: &CategoryFilter) -> Result<(), StorageError> {
    store.set(FILTER_KEY, filter.as_str())
}

/// Check `filter` against the current categories
///
/// When its category is gone the filter falls back to `All`, and the fallback
/// is written to the store so the saved value matches what is shown.
pub fn revalidate_filter(
    store: &LocalStore,
    filter: &CategoryFilter,
    categories: &[String],
) -> CategoryFilter {
    let checked = filter.clone().restrict_to(categories);
    if checked != *filter {
        tracing::info!("Category {:?} no longer exists, showing all", filter.as_str());
        if let Err(e) = save_filter(store, &checked) {
            tracing::error!("Failed to save category filter: {}", e);
        }
    }
    checked
}
