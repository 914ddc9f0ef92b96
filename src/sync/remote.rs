//! Remote quote source
//!
//! The remote is an opaque "list items" / "create item" HTTP endpoint pair.
//! Only the `title` of each listed item is used; everything else is ignored.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::storage::settings::AppSettings;
use crate::sync::SyncError;
use crate::types::quote::Quote;

/// Category assigned to every quote that comes from the remote
pub const SERVER_CATEGORY: &str = "Server";

/// Remote source trait - the sync engine only talks to the server through this
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch one batch of remote quotes
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, SyncError>;
    /// Push a single local quote
    async fn push_quote(&self, quote: &Quote) -> Result<(), SyncError>;
}

/// Map a "list items" response body into at most `batch_size` quotes
///
/// The body must be a JSON array. Items without a string `title` become
/// quotes with empty text.
pub fn parse_remote_items(body: &str, batch_size: usize) -> Result<Vec<Quote>, SyncError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SyncError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    let items = value
        .as_array()
        .ok_or_else(|| SyncError::InvalidResponse("Expected a JSON array".into()))?;

    Ok(items
        .iter()
        .take(batch_size)
        .map(|item| {
            let title = item.get("title").and_then(Value::as_str).unwrap_or_default();
            Quote::new(title, SERVER_CATEGORY)
        })
        .collect())
}

// ============================================================================
// HttpRemote - reqwest-backed implementation
// ============================================================================

pub struct HttpRemote {
    client: reqwest::Client,
    list_url: String,
    push_url: String,
    batch_size: usize,
}

impl HttpRemote {
    pub fn new(settings: &AppSettings) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(concat!("QuoteDeck/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            list_url: settings.remote_url.clone(),
            push_url: settings.push_url.clone(),
            batch_size: settings.batch_size,
        })
    }
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, SyncError> {
        let response = self.client.get(&self.list_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let quotes = parse_remote_items(&body, self.batch_size)?;
        tracing::debug!("Fetched {} remote quotes from {}", quotes.len(), self.list_url);
        Ok(quotes)
    }

    async fn push_quote(&self, quote: &Quote) -> Result<(), SyncError> {
        let response = self.client.post(&self.push_url).json(quote).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status(status.as_u16()));
        }
        Ok(())
    }
}
