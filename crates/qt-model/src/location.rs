//! Navigation handle.
//!
//! The viewer keeps a browser-style location (`base` + `search`) for the
//! current report so the active view options can be copied as a link. Views
//! only ever replace the query string; they never push new entries.

use std::fmt;

/// Read and replace the current location's query string.
pub trait History {
    /// The current query string, including the leading `?` when non-empty.
    fn search(&self) -> &str;

    /// Replace the query string in place.
    fn replace_search(&mut self, search: String);
}

/// A location made of a base URL and a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    base: String,
    search: String,
    replacements: usize,
}

impl Location {
    /// Create a location. A `search` without a leading `?` gets one.
    pub fn new(base: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            search: normalize_search(search.into()),
            replacements: 0,
        }
    }

    /// The base URL without query string.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The full link: base followed by the query string.
    pub fn href(&self) -> String {
        format!("{}{}", self.base, self.search)
    }

    /// How many times the query string has been replaced.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl History for Location {
    fn search(&self) -> &str {
        &self.search
    }

    fn replace_search(&mut self, search: String) {
        self.search = normalize_search(search);
        self.replacements += 1;
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.search)
    }
}

fn normalize_search(search: String) -> String {
    if search.is_empty() || search == "?" {
        String::new()
    } else if search.starts_with('?') {
        search
    } else {
        format!("?{search}")
    }
}
