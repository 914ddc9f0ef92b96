//! Quote collection
//!
//! The in-memory repository plus the category filter and random selection
//! used by the presentation layer.

pub mod display;
pub mod filter;
pub mod repository;

pub use filter::CategoryFilter;
pub use repository::QuoteRepository;
