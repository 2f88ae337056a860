//! Locations and client-side navigation.
//!
//! The filter never performs a page load: it computes the next [`Location`]
//! and hands it to a [`Navigator`], fire-and-forget.

use std::fmt;

use tracing::debug;
use url::{ParseError, Url};

use crate::query::SearchParams;

/// The part of a URL the filter cares about: path and query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub search: SearchParams,
}

impl Location {
    /// The pathname always starts with `/`.
    pub fn new(pathname: impl Into<String>, search: SearchParams) -> Self {
        let pathname = pathname.into();
        let pathname = if pathname.starts_with('/') { pathname } else { format!("/{pathname}") };
        Self { pathname, search }
    }

    /// Parse a path-with-query (`/products?cat=Shoes`) or an absolute URL.
    ///
    /// Fragments are dropped. Only absolute URLs can fail to parse.
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        match Url::parse(input) {
            Ok(url) => {
                return Ok(Self::new(url.path(), SearchParams::parse(url.query().unwrap_or(""))));
            }
            Err(ParseError::RelativeUrlWithoutBase) => {}
            Err(e) => return Err(format!("invalid URL '{input}': {e}")),
        }
        let without_fragment = input.split_once('#').map_or(input, |(head, _)| head);
        let (path, query) = without_fragment.split_once('?').unwrap_or((without_fragment, ""));
        Ok(Self::new(path, SearchParams::parse(query)))
    }

    /// Same path, different query.
    pub fn with_search(&self, search: SearchParams) -> Self {
        Self { pathname: self.pathname.clone(), search }
    }

    /// `<pathname>?<query>`; the `?` is written even when the query is empty.
    pub fn href(&self) -> String {
        format!("{}?{}", self.pathname, self.search)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/", SearchParams::new())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Receives navigation requests. Implementations must not reload the page.
pub trait Navigator {
    fn push(&mut self, target: Location);
}

/// In-memory browser-style history.
///
/// Pushing discards any forward entries, like a browser does after going back.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStack {
    entries: Vec<Location>,
    cursor: usize,
}

impl HistoryStack {
    pub fn new(initial: Location) -> Self {
        Self { entries: vec![initial], cursor: 0 }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Step back one entry. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

impl Navigator for HistoryStack {
    fn push(&mut self, target: Location) {
        debug!(href = %target, "push history entry");
        self.entries.truncate(self.cursor + 1);
        self.entries.push(target);
        self.cursor = self.entries.len() - 1;
    }
}
