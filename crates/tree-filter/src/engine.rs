//! Filter engine: walks a value tree guided by a selector tree.
//!
//! Dispatch rules for [`apply`]:
//! - opaque objects offering [`PlainData`](crate::value::PlainData) are
//!   converted once and the result is dispatched (an object converting to
//!   another object is a scalar);
//! - mappings keep exactly the selected attributes (absent ones become null);
//! - sequences apply the same selector to each element;
//! - lazy nodes are evaluated and the same selector applies to the result;
//! - dual-view nodes route the selector to their detail (`right`) view;
//! - scalars are returned unchanged.
//!
//! Attributes selected without a nested selector go through [`pass_through`]
//! instead, which yields the summary (`left`) of dual-view nodes.
//!
//! Neither function fails on its own. Errors come from lazy producers only
//! and are returned exactly as the producer raised them.
use tracing::{debug, trace};

use crate::error::BoxError;
use crate::selector::{Selector, WILDCARD};
use crate::value::{Lazy, Mapping, Value};

/// What to do with the value behind a selected attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection<'a> {
    Select(&'a Selector),
    PassThrough,
}

impl<'a> Projection<'a> {
    pub fn of(child: Option<&'a Selector>) -> Self {
        child.map_or(Projection::PassThrough, Projection::Select)
    }

    pub fn apply(self, value: &Value) -> Result<Value, BoxError> {
        match self {
            Projection::Select(selector) => apply(selector, value),
            Projection::PassThrough => pass_through(value),
        }
    }
}

/// Filter `value` with `selector`.
pub fn apply(selector: &Selector, value: &Value) -> Result<Value, BoxError> {
    // One conversion step per dispatch; an object converting to another
    // object is treated as a scalar.
    let converted;
    let value = match value.plain_data() {
        Some(plain) => {
            converted = plain;
            &converted
        }
        None => value,
    };

    match value {
        Value::Mapping(map) => project_mapping(selector, map).map(Value::Mapping),
        Value::Sequence(items) => {
            items.iter().map(|item| apply(selector, item)).collect::<Result<_, _>>().map(Value::Sequence)
        }
        Value::Lazy(lazy) => apply(selector, &evaluate(lazy)?),
        Value::DualView { right, .. } => {
            trace!("dual-view node selected, using detail view");
            apply(selector, right)
        }
        Value::Scalar(_) => Ok(value.clone()),
    }
}

/// Filter applied where the selector names an attribute without nesting.
pub fn pass_through(value: &Value) -> Result<Value, BoxError> {
    match value {
        Value::DualView { left, .. } => {
            trace!("dual-view node not selected, using summary view");
            pass_through(left)
        }
        Value::Lazy(lazy) => pass_through(&evaluate(lazy)?),
        other => Ok(other.clone()),
    }
}

fn project_mapping(selector: &Selector, map: &Mapping) -> Result<Mapping, BoxError> {
    let attrs = expand_wildcard(selector, map);
    let missing = Value::NULL;
    let mut out = Mapping::with_capacity(attrs.len());

    for (attr, child) in attrs {
        let projection = Projection::of(child);
        let filtered = match map.get(attr).unwrap_or(&missing) {
            Value::Sequence(items) => Value::Sequence(
                items.iter().map(|item| projection.apply(item)).collect::<Result<_, _>>()?,
            ),
            other => projection.apply(other)?,
        };
        out.insert(attr.to_owned(), filtered);
    }

    Ok(out)
}

/// Selected attributes in output order: the selector's own keys, then (for a
/// wildcard) every unnamed key of the mapping in the mapping's order.
fn expand_wildcard<'a>(
    selector: &'a Selector,
    map: &'a Mapping,
) -> Vec<(&'a str, Option<&'a Selector>)> {
    let mut attrs: Vec<_> = selector.iter().filter(|(attr, _)| *attr != WILDCARD).collect();
    if selector.has_wildcard() {
        attrs.extend(
            map.keys()
                .map(String::as_str)
                .filter(|key| *key != WILDCARD && !selector.contains(key))
                .map(|key| (key, None)),
        );
    }
    attrs
}

fn evaluate(lazy: &Lazy) -> Result<Value, BoxError> {
    trace!("evaluating lazy node");
    lazy.evaluate().inspect_err(|error| debug!(%error, "lazy producer failed"))
}
