//! Normalization and type ranks.
//!
//! Before two values are compared or encoded, each is folded into one of the
//! six collatable kinds:
//!
//! - `undefined` becomes `null`
//! - `NaN`, `Infinity` and `-Infinity` become `null`
//! - dates become their ISO-8601 string (`2012-01-01T00:00:00.000Z`)
//!
//! The kinds are then ordered by [`Rank`]:
//! null < boolean < number < string < array < object.

use crate::{Map, Value};
use chrono::{DateTime, SecondsFormat, Utc};
use std::borrow::Cow;

/// The collation rank of a value kind. Ranks are compared before contents.
///
/// # Examples
///
/// ```rust
/// use serde_collate::{Rank, Value};
///
/// assert_eq!(Rank::of(&Value::Null), Some(Rank::Null));
/// assert_eq!(Rank::of(&Value::from(f64::NAN)), Some(Rank::Null));
/// assert!(Rank::Number < Rank::String);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Null = 1,
    Bool = 2,
    Number = 3,
    String = 4,
    Array = 5,
    Object = 6,
}

impl Rank {
    /// Returns the rank of `value` after normalization, or `None` for an
    /// [`Opaque`](crate::Opaque) value.
    #[must_use]
    pub fn of(value: &Value) -> Option<Rank> {
        Key::of(value).rank()
    }

    /// The digit that prefixes every indexable string of this rank.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self as u8) as char
    }

    /// Inverse of [`Rank::as_char`].
    #[must_use]
    pub const fn from_char(c: char) -> Option<Rank> {
        match c {
            '1' => Some(Rank::Null),
            '2' => Some(Rank::Bool),
            '3' => Some(Rank::Number),
            '4' => Some(Rank::String),
            '5' => Some(Rank::Array),
            '6' => Some(Rank::Object),
            _ => None,
        }
    }
}

/// Shallow normalized view of a [`Value`].
///
/// Only the top level is normalized; children are normalized as the
/// comparator or encoder reaches them.
#[derive(Debug)]
pub(crate) enum Key<'a> {
    Null,
    Bool(bool),
    Number(f64),
    String(Cow<'a, str>),
    Array(&'a [Value]),
    Object(&'a Map),
    Opaque,
}

impl<'a> Key<'a> {
    pub(crate) fn of(value: &'a Value) -> Self {
        match value {
            Value::Null | Value::Undefined => Key::Null,
            Value::Number(n) if !n.is_finite() => Key::Null,
            Value::Number(n) => Key::Number(n.as_f64()),
            Value::Bool(b) => Key::Bool(*b),
            Value::String(s) => Key::String(Cow::Borrowed(s)),
            Value::Date(dt) => Key::String(Cow::Owned(json_date(dt))),
            Value::Array(arr) => Key::Array(arr),
            Value::Object(obj) => Key::Object(obj),
            Value::Opaque(_) => Key::Opaque,
        }
    }

    pub(crate) fn rank(&self) -> Option<Rank> {
        match self {
            Key::Null => Some(Rank::Null),
            Key::Bool(_) => Some(Rank::Bool),
            Key::Number(_) => Some(Rank::Number),
            Key::String(_) => Some(Rank::String),
            Key::Array(_) => Some(Rank::Array),
            Key::Object(_) => Some(Rank::Object),
            Key::Opaque => None,
        }
    }
}

/// Formats a date the way JavaScript's `Date.prototype.toJSON` does.
pub(crate) fn json_date(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Canonicalizes `value` into the six collatable kinds.
///
/// Array elements and object values are normalized recursively; object key
/// order is preserved. Integers stay integers and finite floats stay floats.
/// [`Opaque`](crate::Opaque) values pass through unchanged. Normalizing twice
/// yields the same value as normalizing once.
///
/// # Examples
///
/// ```rust
/// use serde_collate::{normalize, Number, Value};
///
/// assert_eq!(normalize(&Value::Undefined), Value::Null);
/// assert_eq!(normalize(&Value::Number(Number::Infinity)), Value::Null);
/// assert_eq!(
///     normalize(&Value::from(vec![Value::from(f64::NAN), Value::from(1)])),
///     Value::from(vec![Value::Null, Value::from(1)]),
/// );
/// ```
#[must_use]
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Undefined => Value::Null,
        Value::Number(n) if !n.is_finite() => Value::Null,
        Value::Date(dt) => Value::String(json_date(dt)),
        Value::Array(arr) => Value::Array(arr.iter().map(normalize).collect()),
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(k, v)| (k.clone(), normalize(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
