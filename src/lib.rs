//! # serde_collate
//!
//! CouchDB-style collation for dynamically-typed values, plus order-preserving
//! index keys.
//!
//! ## What is collation?
//!
//! Document databases build secondary indexes over keys that can be any JSON
//! value. To keep such an index sorted they need one total order across every
//! kind of value. This crate implements that order:
//!
//! ```text
//! null < false < true < numbers < strings < arrays < objects
//! ```
//!
//! and an encoding of values into strings whose plain byte order is the same
//! order, so the keys can live in any sorted key-value store.
//!
//! ## Key Features
//!
//! - **Collation**: [`collate`] compares two [`Value`]s
//! - **Index keys**: [`to_indexable_string`] produces order-preserving keys,
//!   [`parse_indexable_string`] reads them back
//! - **Normalization**: undefined, `NaN` and `±Infinity` collate as null; dates
//!   collate as their ISO-8601 string
//! - **Serde Compatible**: any `T: Serialize` can be collated or encoded
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_collate::{collate, to_indexable_string, value};
//! use std::cmp::Ordering;
//!
//! let a = value!(["2024", 3, {"draft": false}]);
//! let b = value!(["2024", 10]);
//!
//! assert_eq!(collate(&a, &b), Ordering::Less);
//!
//! let ka = to_indexable_string(&a).unwrap();
//! let kb = to_indexable_string(&b).unwrap();
//! assert!(ka < kb);
//! ```
//!
//! ### Typed Data
//!
//! ```rust
//! use serde::Serialize;
//! use serde_collate::{collate_serialized, to_indexable_key};
//! use std::cmp::Ordering;
//!
//! #[derive(Serialize)]
//! struct Key<'a> { author: &'a str, year: u32 }
//!
//! let a = Key { author: "ada", year: 1843 };
//! let b = Key { author: "ada", year: 1953 };
//! assert_eq!(collate_serialized(&a, &b).unwrap(), Ordering::Less);
//! assert!(to_indexable_key(&a).unwrap() < to_indexable_key(&b).unwrap());
//! ```
//!
//! ## Semantics Worth Knowing
//!
//! - Strings compare by code point, not by locale. This differs from CouchDB's
//!   ICU collation.
//! - Objects compare *positionally*: the first key of one against the first key
//!   of the other, then the first values, and so on. Key order matters.
//! - [`Opaque`] values sit outside the six kinds. [`collate`] sorts them after
//!   every object, all equal to each other. [`partial_collate`] returns `None`
//!   for them and [`to_indexable_string`] returns an error.
//!
//! ## Performance Characteristics
//!
//! - Every operation is O(n) in the size of the inputs
//! - Recursion depth equals nesting depth; callers with adversarially deep
//!   values should bound them. The decoder caps depth at [`MAX_DEPTH`]
//! - All functions are pure and can be called from any thread

pub mod collate;
pub mod error;
pub mod index;
pub mod macros;
pub mod map;
pub mod normalize;
pub mod parse;
pub mod ser;
pub mod value;

pub use collate::{collate, partial_collate, sort_collated};
pub use error::{Error, Result};
pub use index::to_indexable_string;
pub use map::Map;
pub use normalize::{normalize, Rank};
pub use parse::{parse_indexable_string, MAX_DEPTH};
pub use ser::ValueSerializer;
pub use value::{Number, Opaque, Value};

use serde::Serialize;
use std::cmp::Ordering;

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_collate::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented, e.g. a map with
/// non-string keys or a struct variant.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Compares two serializable values in collation order.
///
/// # Errors
///
/// Returns an error if either value cannot be converted with [`to_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn collate_serialized<A, B>(a: &A, b: &B) -> Result<Ordering>
where
    A: ?Sized + Serialize,
    B: ?Sized + Serialize,
{
    Ok(collate(&to_value(a)?, &to_value(b)?))
}

/// Encodes a serializable value into an order-preserving index key.
///
/// # Errors
///
/// Returns an error if the value cannot be converted with [`to_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_indexable_key<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_indexable_string(&to_value(value)?)
}
