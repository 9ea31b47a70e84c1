//! Attribute selectors for nested value trees.
//!
//! A selector such as `name,environments[id,last_deploy]` names the
//! attributes to keep at each level of a tree of mappings, sequences and
//! scalars; `*` keeps every remaining attribute.
//!
//! ```
//! use tree_filter::{TreeFilter, dual, map, seq};
//!
//! let data = map([
//!     ("name", "shop".into()),
//!     ("owner", dual("/users/7", map([("id", 7.into()), ("name", "Ada".into())]))),
//!     ("environments", seq([
//!         map([("id", "prod".into()), ("last_deploy", "2024-05-01".into()), ("hosts", 3.into())]),
//!     ])),
//! ]);
//!
//! let filter = TreeFilter::new("name,owner,environments[id]");
//! assert_eq!(
//!     filter.filter(&data).unwrap(),
//!     map([
//!         ("name", "shop".into()),
//!         ("owner", "/users/7".into()),
//!         ("environments", seq([map([("id", "prod".into())])])),
//!     ])
//! );
//!
//! let detailed = TreeFilter::new("owner[name]").filter(&data).unwrap();
//! assert_eq!(detailed, map([("owner", map([("name", "Ada".into())]))]));
//! ```
pub mod engine;
pub mod error;
pub mod filter;
#[cfg(feature = "json")]
pub mod json;
pub mod parser;
pub mod selector;
pub mod value;

pub use error::{BoxError, PlainDataError};
pub use filter::TreeFilter;
pub use selector::{Selector, WILDCARD};
pub use value::{Lazy, Mapping, Opaque, PlainData, Scalar, Value, dual, lazy, map, null, seq};
