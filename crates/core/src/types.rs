//! Core types shared across the storefront filter: product categories, the
//! recognized query-parameter keys, and the fixed sort tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// A product category as supplied by the hosting page.
///
/// Filtering is keyed by `name`; `id` only identifies the option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

// ---------------------------------------------------------------------------
// Filter keys
// ---------------------------------------------------------------------------

/// Query parameters the filter reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Category,
    Sort,
    MinPrice,
    MaxPrice,
}

impl FilterKey {
    pub const ALL: [FilterKey; 4] =
        [FilterKey::Category, FilterKey::Sort, FilterKey::MinPrice, FilterKey::MaxPrice];

    /// Name of the parameter in the query string.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Category => "cat",
            FilterKey::Sort => "sort",
            FilterKey::MinPrice => "minPrice",
            FilterKey::MaxPrice => "maxPrice",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown filter key '{s}' (expected cat, sort, minPrice or maxPrice)"))
    }
}

// ---------------------------------------------------------------------------
// Sort orders
// ---------------------------------------------------------------------------

/// The fixed sort tokens offered by the sort control.
///
/// Tokens are `"<direction> <field>"`; the consumer of the URL interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    UpdatedAsc,
    UpdatedDesc,
}

impl SortOrder {
    /// Option order in the sort control.
    pub const ALL: [SortOrder; 4] =
        [SortOrder::PriceAsc, SortOrder::PriceDesc, SortOrder::UpdatedAsc, SortOrder::UpdatedDesc];

    pub fn token(self) -> &'static str {
        match self {
            SortOrder::PriceAsc => "asc price",
            SortOrder::PriceDesc => "desc price",
            SortOrder::UpdatedAsc => "asc updatedAt",
            SortOrder::UpdatedDesc => "desc updatedAt",
        }
    }

    /// Human-readable option label.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::PriceAsc => "Price (low to high)",
            SortOrder::PriceDesc => "Price (high to low)",
            SortOrder::UpdatedAsc => "Newest",
            SortOrder::UpdatedDesc => "Oldest",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        SortOrder::ALL.into_iter().find(|s| s.token() == token)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_key_round_trips_through_wire_name() {
        for key in FilterKey::ALL {
            assert_eq!(key.as_str().parse::<FilterKey>().unwrap(), key);
        }
    }

    #[test]
    fn filter_key_rejects_unknown_names() {
        let err = "category".parse::<FilterKey>().unwrap_err();
        assert!(err.contains("category"), "error should name the key: {err}");
        assert!("minprice".parse::<FilterKey>().is_err(), "keys are case-sensitive");
    }

    #[test]
    fn sort_tokens_and_labels() {
        let pairs: Vec<(&str, &str)> = SortOrder::ALL.iter().map(|s| (s.token(), s.label())).collect();
        assert_eq!(
            pairs,
            vec![
                ("asc price", "Price (low to high)"),
                ("desc price", "Price (high to low)"),
                ("asc updatedAt", "Newest"),
                ("desc updatedAt", "Oldest"),
            ]
        );
        assert_eq!(SortOrder::from_token("desc updatedAt"), Some(SortOrder::UpdatedDesc));
        assert_eq!(SortOrder::from_token("price"), None);
    }

    #[test]
    fn category_deserializes_from_page_json() {
        let cats: Vec<Category> =
            serde_json::from_str(r#"[{"id":"c1","name":"Shoes"},{"id":"c2","name":"Hats"}]"#).unwrap();
        assert_eq!(cats, vec![Category::new("c1", "Shoes"), Category::new("c2", "Hats")]);
    }
}
