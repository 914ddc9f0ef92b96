//! Quote types
//!
//! Defines the quote record and the validation applied to user input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single quote record
///
/// `text` is the identity key: two quotes are "the same" when their text
/// matches exactly. Both fields default to empty so that loosely shaped
/// imported objects still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote itself
    #[serde(default)]
    pub text: String,
    /// Free-form category label
    #[serde(default)]
    pub category: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Build a quote from raw form input
    ///
    /// Both values are trimmed and must be non-empty afterwards.
    pub fn from_input(text: &str, category: &str) -> Result<Self, QuoteError> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() || category.is_empty() {
            return Err(QuoteError::MissingFields);
        }
        Ok(Self::new(text, category))
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {}", self.text, self.category)
    }
}

/// Quote input errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Please enter both quote and category.")]
    MissingFields,
}
