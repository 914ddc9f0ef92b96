//! QuoteDeck Library
//!
//! Core library for the QuoteDeck desktop widget: a local quote collection
//! with category filtering, JSON import/export, and periodic server sync.

pub mod app;
pub mod quotes;
pub mod storage;
pub mod sync;
pub mod types;
pub mod ui;
