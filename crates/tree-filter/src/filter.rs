use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::debug;

use crate::engine;
use crate::error::BoxError;
use crate::parser;
use crate::selector::Selector;
use crate::value::Value;

/// Compiled selector. Parsing is deferred to first use and cached, so one
/// filter can be applied to any number of value trees (also from several
/// threads).
#[derive(Clone)]
pub struct TreeFilter {
    source: String,
    selector: OnceLock<Selector>,
}

impl TreeFilter {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into(), selector: OnceLock::new() }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parsed selector tree, built on first access.
    pub fn selector(&self) -> &Selector {
        self.selector.get_or_init(|| {
            let selector = parser::parse_str(&self.source);
            debug!(depth = selector.depth(), "selector cached");
            selector
        })
    }

    /// Project `value` onto the selector.
    ///
    /// # Errors
    /// Returns the error of the first lazy producer that fails while being
    /// reached, unchanged.
    pub fn filter(&self, value: &Value) -> Result<Value, BoxError> {
        engine::apply(self.selector(), value)
    }
}

impl fmt::Debug for TreeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<TreeFilter {}>", self.selector())
    }
}

impl fmt::Display for TreeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.selector(), f)
    }
}

impl FromStr for TreeFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for TreeFilter {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for TreeFilter {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::map;

    #[test]
    fn selector_is_parsed_once_and_reused() {
        let filter = TreeFilter::new("a[b]");
        let first: *const Selector = filter.selector();
        let second: *const Selector = filter.selector();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn debug_shows_parsed_tree() {
        let filter = TreeFilter::new("a[b,c],,d]ignored");
        assert_eq!(format!("{filter:?}"), "<TreeFilter a[b,c],d>");
        assert_eq!(filter.to_string(), "a[b,c],d");
        assert_eq!(filter.source(), "a[b,c],,d]ignored");
    }

    #[test]
    fn filter_is_shareable_across_threads() {
        let filter = TreeFilter::new("a");
        let value = map([("a", 1.into()), ("b", 2.into())]);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(filter.filter(&value).unwrap(), map([("a", 1.into())]));
                });
            }
        });
    }
}
