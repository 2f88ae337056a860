//! Local filter state and the operations that write it back to the URL.
//!
//! [`FilterState`] is created once from the query parameters present at mount
//! and then follows user input. Each operation returns the [`Location`] to
//! navigate to; it never validates values.

use serde::Serialize;
use tracing::debug;

use crate::navigation::Location;
use crate::query::SearchParams;
use crate::types::{Category, FilterKey, SortOrder};

/// Values currently shown by the four filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub category: String,
    pub sort: String,
    pub min_price: String,
    pub max_price: String,
}

impl FilterState {
    /// Initial control values. Missing parameters become empty strings.
    pub fn from_params(params: &SearchParams) -> Self {
        Self {
            category: params.filter_value(FilterKey::Category).to_string(),
            sort: params.filter_value(FilterKey::Sort).to_string(),
            min_price: params.filter_value(FilterKey::MinPrice).to_string(),
            max_price: params.filter_value(FilterKey::MaxPrice).to_string(),
        }
    }

    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Category => &self.category,
            FilterKey::Sort => &self.sort,
            FilterKey::MinPrice => &self.min_price,
            FilterKey::MaxPrice => &self.max_price,
        }
    }

    fn field_mut(&mut self, key: FilterKey) -> &mut String {
        match key {
            FilterKey::Category => &mut self.category,
            FilterKey::Sort => &mut self.sort,
            FilterKey::MinPrice => &mut self.min_price,
            FilterKey::MaxPrice => &mut self.max_price,
        }
    }

    /// Typing in the min-price box. The URL is only written on submit.
    pub fn set_min_price_input(&mut self, value: impl Into<String>) {
        self.min_price = value.into();
    }

    /// Typing in the max-price box. The URL is only written on submit.
    pub fn set_max_price_input(&mut self, value: impl Into<String>) {
        self.max_price = value.into();
    }

    /// A select control changed: store `value` locally and set `key` in the
    /// current query. Every other parameter keeps its value and position.
    pub fn filter_change(&mut self, key: FilterKey, value: &str, current: &Location) -> Location {
        *self.field_mut(key) = value.to_string();

        let mut search = current.search.clone();
        search.set(key.as_str(), value);
        let target = current.with_search(search);
        debug!(key = %key, value, href = %target, "filter changed");
        target
    }

    /// The price form was submitted: write both bounds, empty or not.
    ///
    /// Neither bound is checked to be numeric, and `min > max` passes through.
    pub fn set_prices(&self, current: &Location) -> Location {
        let mut search = current.search.clone();
        search.set(FilterKey::MinPrice.as_str(), &self.min_price);
        search.set(FilterKey::MaxPrice.as_str(), &self.max_price);
        let target = current.with_search(search);
        debug!(min = %self.min_price, max = %self.max_price, href = %target, "prices submitted");
        target
    }

    /// Filters with a non-empty value, in query-key order.
    pub fn active(&self) -> Vec<(FilterKey, &str)> {
        FilterKey::ALL
            .into_iter()
            .map(|k| (k, self.get(k)))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Select options
// ---------------------------------------------------------------------------

/// One `<option>` of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Stable render key.
    pub key: String,
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn new(key: &str, value: &str, label: &str) -> Self {
        Self { key: key.to_string(), value: value.to_string(), label: label.to_string(), selected: false }
    }
}

/// Select the first option whose value is `current`, as a `<select>` does.
fn mark_selected(options: &mut [SelectOption], current: &str) {
    if let Some(opt) = options.iter_mut().find(|o| o.value == current) {
        opt.selected = true;
    }
}

/// The empty "Category" option followed by one option per category.
///
/// Option values are category names; keys are category ids.
pub fn category_options(categories: &[Category], current: &str) -> Vec<SelectOption> {
    let mut options = Vec::with_capacity(categories.len() + 1);
    options.push(SelectOption::new("", "", "Category"));
    for cat in categories {
        options.push(SelectOption::new(&cat.id, &cat.name, &cat.name));
    }
    mark_selected(&mut options, current);
    options
}

/// The empty "Sort By" option followed by the fixed sort tokens.
pub fn sort_options(current: &str) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "", "Sort By")];
    options.extend(SortOrder::ALL.into_iter().map(|s| SelectOption::new(s.token(), s.token(), s.label())));
    mark_selected(&mut options, current);
    options
}
