//! Storefront product filter — URL-synchronized category, sort and price filters.
//!
//! The filter widget keeps four controls in sync with the query string of the
//! current URL. This crate holds everything that is not rendering:
//!
//! - [`types`] — Categories, filter keys, sort tokens
//! - [`query`] — Ordered query-string parameters with `URLSearchParams` semantics
//! - [`filter`] — Local filter state and the two URL-writing operations
//! - [`navigation`] — Locations, the `Navigator` seam, in-memory history
//! - [`config`] — `storefront.toml` loading

pub mod config;
pub mod filter;
pub mod navigation;
pub mod query;
pub mod types;

pub use config::StorefrontConfig;
pub use filter::{category_options, sort_options, FilterState, SelectOption};
pub use navigation::{HistoryStack, Location, Navigator};
pub use query::SearchParams;
pub use types::{Category, FilterKey, SortOrder};
