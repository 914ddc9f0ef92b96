//! Category filter

use crate::types::quote::Quote;

/// Stored value meaning "no filter"
pub const ALL_CATEGORIES: &str = "all";

/// Which quotes the display draws from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse the persisted / dropdown representation
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES || value.is_empty() {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(category) => category,
        }
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => &quote.category == category,
        }
    }

    /// Fall back to `All` when the selected category no longer exists
    pub fn restrict_to(self, categories: &[String]) -> Self {
        match self {
            Self::Category(ref category) if !categories.contains(category) => Self::All,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        let filter = CategoryFilter::parse("Motivation");
        assert_eq!(filter, CategoryFilter::Category("Motivation".to_string()));
        assert_eq!(filter.as_str(), "Motivation");
    }

    #[test]
    fn test_restrict_to_unknown_category() {
        let categories = vec!["Motivation".to_string()];
        let known = CategoryFilter::parse("Motivation").restrict_to(&categories);
        assert_eq!(known.as_str(), "Motivation");
        let unknown = CategoryFilter::parse("Gone").restrict_to(&categories);
        assert_eq!(unknown, CategoryFilter::All);
    }
}
