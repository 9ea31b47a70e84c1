//! Value trees consumed and produced by the filter engine.
//!
//! A [`Value`] is one of five kinds: mapping, sequence, scalar, dual-view node
//! or lazy node. The last two only make sense as *input* to the engine; a
//! filtered tree may still contain them below a pass-through attribute, but
//! consumers expecting plain data must reject them (see the `json` module).
//!
//! Example:
//! ```
//! use tree_filter::value::{Value, dual, lazy, map, seq};
//!
//! let env = map([
//!     ("id", "prod".into()),
//!     ("hosts", seq([Value::from("a"), Value::from("b")])),
//!     ("owner", dual("/users/7", map([("id", 7.into()), ("name", "Ada".into())]))),
//!     ("stats", lazy(|| Ok(map([("deploys", 42.into())])))),
//! ]);
//!
//! assert_eq!(env.get("id"), Some(&Value::from("prod")));
//! assert!(env.get("missing").is_none());
//! ```
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::BoxError;

/// Ordered attribute map; iteration follows insertion order.
pub type Mapping = IndexMap<String, Value>;

/// Capability of an opaque domain object to present itself as filterable data.
///
/// The engine asks for the conversion before dispatching on an
/// [`Scalar::Object`]; `None` keeps the object opaque and it is returned as-is.
pub trait PlainData: fmt::Debug + Send + Sync {
    fn to_plain_data(&self) -> Option<Value>;
}

/// Shared handle to a domain object. Equality is identity.
#[derive(Clone)]
pub struct Opaque(Arc<dyn PlainData>);

impl Opaque {
    pub fn new(object: impl PlainData + 'static) -> Self {
        Self(Arc::new(object))
    }

    pub fn to_plain_data(&self) -> Option<Value> {
        self.0.to_plain_data()
    }
}

impl From<Arc<dyn PlainData>> for Opaque {
    fn from(object: Arc<dyn PlainData>) -> Self {
        Self(object)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Opaque").field(&self.0).finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    /// Unsigned integers beyond `i64::MAX`.
    Unsigned(u64),
    Number(f64),
    String(String),
    Object(Opaque),
}

type Producer = dyn Fn() -> Result<Value, BoxError> + Send + Sync;

/// Deferred value. The producer runs every time the engine reaches the node
/// and never before.
#[derive(Clone)]
pub struct Lazy(Arc<Producer>);

impl Lazy {
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(producer))
    }

    pub fn evaluate(&self) -> Result<Value, BoxError> {
        (self.0)()
    }
}

impl PartialEq for Lazy {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl fmt::Debug for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Lazy(..)")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Mapping(Mapping),
    Sequence(Vec<Value>),
    Scalar(Scalar),
    /// Summary (`left`) shown when the selector stops here, detail (`right`)
    /// filtered when the selector continues.
    DualView { left: Box<Value>, right: Box<Value> },
    Lazy(Lazy),
}

impl Value {
    pub const NULL: Value = Value::Scalar(Scalar::Null);

    pub fn object(object: impl PlainData + 'static) -> Self {
        Value::Scalar(Scalar::Object(Opaque::new(object)))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }

    /// Whether the tree contains no dual-view or lazy node.
    pub fn is_plain(&self) -> bool {
        match self {
            Value::Mapping(map) => map.values().all(Value::is_plain),
            Value::Sequence(items) => items.iter().all(Value::is_plain),
            Value::Scalar(_) => true,
            Value::DualView { .. } | Value::Lazy(_) => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        if let Value::Mapping(map) = self { Some(map) } else { None }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        if let Value::Sequence(items) = self { Some(items) } else { None }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::Scalar(Scalar::String(s)) = self { Some(s) } else { None }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Value::Scalar(Scalar::Integer(i)) = self { Some(*i) } else { None }
    }

    /// Conversion offered by an opaque domain object, if any.
    pub(crate) fn plain_data(&self) -> Option<Value> {
        match self {
            Value::Scalar(Scalar::Object(object)) => object.to_plain_data(),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::NULL
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Scalar(Scalar::Integer(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Scalar(Scalar::Integer(i64::from(i)))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(Value::Scalar(Scalar::Unsigned(u)), Value::from)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(Scalar::Number(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(s.to_owned()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::String(s))
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Lazy> for Value {
    fn from(lazy: Lazy) -> Self {
        Value::Lazy(lazy)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::NULL, Into::into)
    }
}

// Convenience helpers for concise tree construction
pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Value {
    Value::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
}

pub fn seq(items: impl IntoIterator<Item = Value>) -> Value {
    Value::Sequence(items.into_iter().collect())
}

pub fn dual(left: impl Into<Value>, right: impl Into<Value>) -> Value {
    Value::DualView { left: Box::new(left.into()), right: Box::new(right.into()) }
}

pub fn lazy<F>(producer: F) -> Value
where
    F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
{
    Value::Lazy(Lazy::new(producer))
}

pub fn null() -> Value {
    Value::NULL
}
