//! Ordered query-string parameters.
//!
//! Mirrors the browser's `URLSearchParams`: pairs keep their order, duplicate
//! keys survive parsing, and `set` overwrites in place so a parameter never
//! moves when its value changes.

use std::fmt;

use url::form_urlencoded;

use crate::types::FilterKey;

/// Query-string parameters as an ordered list of `(name, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a form-urlencoded query string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes()).into_owned().collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Value of a filter parameter, or `""` when absent.
    pub fn filter_value(&self, key: FilterKey) -> &str {
        self.get(key.as_str()).unwrap_or("")
    }

    /// Set `key` to `value`.
    ///
    /// The first existing pair is updated in place and any later duplicates are
    /// removed; a new key is appended.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found = false;
        self.pairs.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            *v = value.to_string();
            true
        });
        if !found {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize as `application/x-www-form-urlencoded`, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decodes_plus_and_percent_escapes() {
        let params = SearchParams::parse("?sort=asc+price&cat=T%C3%B6pfe&minPrice=");
        assert_eq!(params.get("sort"), Some("asc price"));
        assert_eq!(params.get("cat"), Some("Töpfe"));
        assert_eq!(params.get("minPrice"), Some(""));
        assert_eq!(params.get("maxPrice"), None);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn parse_keeps_duplicate_keys_in_order() {
        let params = SearchParams::parse("tag=a&cat=x&tag=b");
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("tag", "a"), ("cat", "x"), ("tag", "b")]);
        assert_eq!(params.get("tag"), Some("a"));
    }

    #[test]
    fn parse_empty_query() {
        assert!(SearchParams::parse("").is_empty());
        assert!(SearchParams::parse("?").is_empty());
    }

    #[test]
    fn set_overwrites_in_place_and_drops_duplicates() {
        let mut params = SearchParams::parse("cat=a&page=2&cat=b");
        params.set("cat", "Shoes");
        assert_eq!(params.to_query_string(), "cat=Shoes&page=2");
    }

    #[test]
    fn set_appends_new_keys() {
        let mut params = SearchParams::parse("page=2");
        params.set("sort", "desc price");
        assert_eq!(params.to_query_string(), "page=2&sort=desc+price");
    }

    #[test]
    fn serialization_escapes_reserved_characters() {
        let mut params = SearchParams::new();
        params.set("cat", "Bags & Belts");
        params.set("q", "50%=half");
        assert_eq!(params.to_query_string(), "cat=Bags+%26+Belts&q=50%25%3Dhalf");
    }

    #[test]
    fn filter_value_defaults_to_empty() {
        let params = SearchParams::parse("cat=Shoes");
        assert_eq!(params.filter_value(FilterKey::Category), "Shoes");
        assert_eq!(params.filter_value(FilterKey::MaxPrice), "");
    }
}
