//! Parsed selector trees.
//!
//! A [`Selector`] maps attribute names to an optional nested selector. A key
//! without a nested selector stops filtering for that attribute (pass-through);
//! the [`WILDCARD`] key pulls in every attribute the selector does not name.
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::parser;

/// Selector key that includes every attribute not otherwise named.
pub const WILDCARD: &str = "*";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    attrs: IndexMap<String, Option<Selector>>,
}

impl Selector {
    /// Selector with no attributes; filters every mapping down to `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse selector text. Never fails; see [`parser::parse`] for how
    /// malformed brackets fold.
    pub fn parse(text: &str) -> Self {
        parser::parse_str(text)
    }

    /// Builder-style insert used by tests and programmatic construction.
    /// Re-inserting a key keeps its original position.
    pub fn with(mut self, attr: impl Into<String>, child: Option<Selector>) -> Self {
        self.attrs.insert(attr.into(), child);
        self
    }

    pub(crate) fn from_attrs(attrs: IndexMap<String, Option<Selector>>) -> Self {
        Self { attrs }
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn contains(&self, attr: &str) -> bool {
        self.attrs.contains_key(attr)
    }

    pub fn has_wildcard(&self) -> bool {
        self.contains(WILDCARD)
    }

    /// `None` if the attribute is not selected, `Some(None)` if it is selected
    /// without a nested selector.
    pub fn get(&self, attr: &str) -> Option<Option<&Selector>> {
        self.attrs.get(attr).map(Option::as_ref)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }

    /// Attributes in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Selector>)> {
        self.attrs.iter().map(|(attr, child)| (attr.as_str(), child.as_ref()))
    }

    /// Nesting depth; a flat selector has depth 1, an empty one depth 0.
    pub fn depth(&self) -> usize {
        if self.attrs.is_empty() {
            return 0;
        }
        1 + self.attrs.values().flatten().map(Selector::depth).max().unwrap_or(0)
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parser::parse_str(s))
    }
}

/// Renders canonical selector text, e.g. `a[b,c],d`.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (attr, child)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(attr)?;
            if let Some(child) = child {
                write!(f, "[{child}]")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", 1)]
    #[case("a,b", 1)]
    #[case("a[b]", 2)]
    #[case("a[b[c]],d", 3)]
    #[case("a[]", 1)]
    #[case("", 0)]
    fn depth_follows_nesting(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(Selector::parse(text).depth(), expected);
    }

    #[rstest]
    #[case("a,b")]
    #[case("a[b,c],d")]
    #[case("a[]")]
    #[case("a[b[c[*]]],e")]
    #[case("[x]")]
    fn display_round_trips_canonical_text(#[case] text: &str) {
        let selector = Selector::parse(text);
        assert_eq!(selector.to_string(), text);
        assert_eq!(Selector::parse(&selector.to_string()), selector);
    }

    #[test]
    fn get_distinguishes_unselected_from_pass_through() {
        let selector = Selector::parse("a,b[c]");
        assert_eq!(selector.get("a"), Some(None));
        assert_eq!(selector.get("b"), Some(Some(&Selector::new().with("c", None))));
        assert_eq!(selector.get("z"), None);
    }

    #[test]
    fn wildcard_is_an_ordinary_key() {
        let selector = Selector::parse("id,*");
        assert!(selector.has_wildcard());
        assert_eq!(selector.keys().collect::<Vec<_>>(), ["id", "*"]);
    }

    #[test]
    fn from_str_is_infallible() {
        let Ok(selector) = "a[b".parse::<Selector>();
        assert_eq!(selector, Selector::new().with("a", Some(Selector::new().with("b", None))));
    }
}
