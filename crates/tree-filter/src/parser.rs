//! Recursive-descent parser for selector text.
//!
//! ```text
//! selector := group
//! group    := item (',' item)*
//! item     := label ('[' group ']')?
//! label    := one or more characters other than ',', '[' and ']'
//! ```
//!
//! The grammar is permissive: every input yields a selector. Unbalanced
//! brackets fold as follows:
//! - an unmatched `[` extends the nested group to the end of input;
//! - a stray `]` closes the outermost group, later text is ignored;
//! - empty labels before `,` or at end of input add nothing, but an empty
//!   label before `[` is kept as a key.
//!
//! Whitespace is an ordinary label character and there is no escaping.
use indexmap::IndexMap;
use tracing::debug;

use crate::selector::Selector;

/// Parse one bracket level from a shared character cursor.
///
/// Consumes characters up to and including the `]` that closes this level,
/// or to the end of input. Nested groups are parsed by recursive calls on the
/// same cursor, so the caller sees exactly the input after this level.
pub fn parse<I>(input: &mut I) -> Selector
where
    I: Iterator<Item = char> + ?Sized,
{
    let mut attrs: IndexMap<String, Option<Selector>> = IndexMap::new();
    let mut label = String::new();

    while let Some(ch) = input.next() {
        match ch {
            ',' => {
                if !label.is_empty() {
                    attrs.insert(std::mem::take(&mut label), None);
                }
            }
            '[' => {
                let child = parse(&mut *input);
                attrs.insert(std::mem::take(&mut label), Some(child));
            }
            ']' => break,
            other => label.push(other),
        }
    }

    if !label.is_empty() {
        attrs.insert(label, None);
    }

    Selector::from_attrs(attrs)
}

/// Parse complete selector text.
pub fn parse_str(text: &str) -> Selector {
    let mut chars = text.chars();
    let selector = parse(&mut chars);
    let rest = chars.as_str();
    if !rest.is_empty() {
        debug!(trailing = rest, "ignoring selector text after unmatched ']'");
    }
    debug!(source = text, attributes = selector.len(), "parsed selector");
    selector
}
