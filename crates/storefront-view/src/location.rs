//! Location and query-string handling.
//!
//! The URL is the source of truth for the listing page. [`SearchParams`]
//! keeps every pair it was parsed with, in order, so changing one parameter
//! never drops another.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use url::form_urlencoded;

/// Ordered `key=value` pairs of a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`.
    /// Percent escapes and `+` are decoded.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the value of `key` in place, or append it.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = false;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Remove every value for `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// Current route: path plus query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub params: SearchParams,
}

impl Location {
    /// Parse `"/phones?sort=newest"`. A `#fragment` is ignored.
    pub fn parse(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let path = if path.is_empty() { "/" } else { path };
        Self {
            path: path.to_string(),
            params: SearchParams::parse(query),
        }
    }

    /// Non-empty path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    /// First path segment, the category token on listing pages. Empty at the root.
    pub fn category_token(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.params.is_empty() {
            write!(f, "?{}", self.params.to_query_string())?;
        }
        Ok(())
    }
}

/// Read/write access to the current URL, supplied by the router.
pub trait Navigator: Send + Sync {
    fn location(&self) -> Location;

    /// Replace the query string of the current location, keeping the path.
    fn replace_params(&self, params: SearchParams);
}

/// Apply `update` to the current query parameters and write them back.
pub fn update_params(navigator: &dyn Navigator, update: impl FnOnce(&mut SearchParams)) {
    let mut params = navigator.location().params;
    update(&mut params);
    navigator.replace_params(params);
}

#[derive(Debug, Default)]
struct History {
    location: Location,
    param_writes: usize,
}

/// In-memory [`Navigator`]. Clones share the same location.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    inner: Arc<RwLock<History>>,
}

impl MemoryNavigator {
    pub fn new(url: &str) -> Self {
        Self {
            inner: Arc::new(RwLock::new(History {
                location: Location::parse(url),
                param_writes: 0,
            })),
        }
    }

    /// Route change: replace path and query.
    pub fn navigate(&self, url: &str) {
        let mut history = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        history.location = Location::parse(url);
    }

    /// Number of [`Navigator::replace_params`] calls so far.
    pub fn param_writes(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .param_writes
    }
}

impl Navigator for MemoryNavigator {
    fn location(&self) -> Location {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .location
            .clone()
    }

    fn replace_params(&self, params: SearchParams) {
        let mut history = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        history.location.params = params;
        history.param_writes += 1;
    }
}
