//! Quote repository
//!
//! Ordered, append-only list of quotes. Persistence is the caller's job:
//! every mutation must be followed by `storage::quotes::save_quotes`.

use crate::quotes::filter::CategoryFilter;
use crate::types::quote::Quote;
use serde::{Deserialize, Serialize};

/// In-memory quote collection, insertion order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteRepository {
    quotes: Vec<Quote>,
}

impl QuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// Append a quote. No deduplication happens here.
    pub fn add(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// Append many quotes, e.g. from an import
    pub fn extend(&mut self, quotes: impl IntoIterator<Item = Quote>) {
        self.quotes.extend(quotes);
    }

    /// First quote whose text matches exactly
    pub fn find_by_text(&self, text: &str) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.text == text)
    }

    /// Index of the first quote whose text matches exactly
    pub fn position_by_text(&self, text: &str) -> Option<usize> {
        self.quotes.iter().position(|q| q.text == text)
    }

    /// Overwrite the category of the quote at `index`
    ///
    /// Returns false when the index is out of range.
    pub fn update_category(&mut self, index: usize, category: impl Into<String>) -> bool {
        match self.quotes.get_mut(index) {
            Some(quote) => {
                quote.category = category.into();
                true
            }
            None => false,
        }
    }

    /// Distinct categories in first-seen order
    pub fn all_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for quote in &self.quotes {
            if !categories.contains(&quote.category) {
                categories.push(quote.category.clone());
            }
        }
        categories
    }

    /// Quotes visible under `filter`
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| filter.matches(q)).collect()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
