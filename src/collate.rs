//! The collation comparator.
//!
//! Values are compared by [`Rank`](crate::Rank) first, then by kind:
//!
//! | Kind | Rule |
//! |------|------|
//! | null | all nulls are equal |
//! | boolean | `false < true` |
//! | number | real-number order, `-0 == 0` |
//! | string | ordinal (code point) order, not locale-aware |
//! | array | element-wise; a strict prefix sorts first |
//! | object | positional: key *i* vs key *i*, then value *i* vs value *i*; fewer keys sorts first |
//!
//! String order is an intentional simplification of CouchDB, which uses ICU
//! collation. Both comparison and [`to_indexable_string`](crate::to_indexable_string)
//! use code point order, so the two always agree.
//!
//! [`Opaque`](crate::Opaque) values sit outside the six kinds. [`collate`]
//! puts them after every object and treats all of them as equal, which keeps
//! it a total order. [`partial_collate`] reports them as unordered instead.
//!
//! Recursion depth equals the nesting depth of the inputs.

use crate::normalize::Key;
use crate::{Map, Value};
use std::cmp::Ordering;

/// How a comparison treats values that have no rank.
#[derive(Clone, Copy)]
enum Unranked {
    /// The comparison is undefined.
    Reject,
    /// Unranked values sort last and are all equal.
    Last,
}

/// Compares two values in collation order.
///
/// [`Opaque`](crate::Opaque) values sort after everything else and compare
/// equal to each other, so `collate` is a total order and safe to sort with.
/// Use [`partial_collate`] to detect them.
///
/// `collate(a, b) as i32` yields the `-1 / 0 / 1` integer form.
///
/// # Examples
///
/// ```rust
/// use serde_collate::{collate, value};
/// use std::cmp::Ordering;
///
/// assert_eq!(collate(&value!(null), &value!(true)), Ordering::Less);
/// assert_eq!(collate(&value!([1, 2]), &value!([1, 2, 3])), Ordering::Less);
/// assert_eq!(collate(&value!({"a": 3, "b": 2}), &value!({"c": 1, "b": 3})), Ordering::Less);
/// ```
#[must_use]
pub fn collate(a: &Value, b: &Value) -> Ordering {
    compare(a, b, Unranked::Last).unwrap_or(Ordering::Equal)
}

/// Compares two values, returning `None` when the result is undefined.
///
/// The result is undefined exactly when the comparison has to rank an
/// [`Opaque`](crate::Opaque) value. An opaque value nested behind an earlier
/// difference is never reached and does not make the result undefined.
///
/// # Examples
///
/// ```rust
/// use serde_collate::{partial_collate, Opaque, Value};
/// use std::cmp::Ordering;
///
/// let opaque = Value::Opaque(Opaque::new("fn"));
/// assert_eq!(partial_collate(&Value::from(1), &opaque), None);
///
/// let a = Value::from(vec![Value::from(1), opaque.clone()]);
/// let b = Value::from(vec![Value::from(2), opaque]);
/// assert_eq!(partial_collate(&a, &b), Some(Ordering::Less));
/// ```
#[must_use]
pub fn partial_collate(a: &Value, b: &Value) -> Option<Ordering> {
    compare(a, b, Unranked::Reject)
}

/// Sorts a slice of values in collation order.
///
/// The sort is stable, so values that collate equal keep their relative order.
pub fn sort_collated(values: &mut [Value]) {
    values.sort_by(collate);
}

fn compare(a: &Value, b: &Value, unranked: Unranked) -> Option<Ordering> {
    let a = Key::of(a);
    let b = Key::of(b);
    let rank = match (a.rank(), b.rank(), unranked) {
        (Some(x), Some(y), _) => x.cmp(&y),
        (_, _, Unranked::Reject) => return None,
        (None, None, Unranked::Last) => return Some(Ordering::Equal),
        (None, Some(_), Unranked::Last) => return Some(Ordering::Greater),
        (Some(_), None, Unranked::Last) => return Some(Ordering::Less),
    };
    if rank != Ordering::Equal {
        return Some(rank);
    }
    match (a, b) {
        (Key::Null, Key::Null) => Some(Ordering::Equal),
        (Key::Bool(a), Key::Bool(b)) => Some(a.cmp(&b)),
        (Key::Number(a), Key::Number(b)) => Some(number_cmp(a, b)),
        (Key::String(a), Key::String(b)) => Some(a.cmp(&b)),
        (Key::Array(a), Key::Array(b)) => array_collate(a, b, unranked),
        (Key::Object(a), Key::Object(b)) => object_collate(a, b, unranked),
        // equal ranks always pair identical kinds
        _ => None,
    }
}

fn number_cmp(a: f64, b: f64) -> Ordering {
    // finite after normalization, and -0.0 == 0.0 under partial_cmp
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn array_collate(a: &[Value], b: &[Value], unranked: Unranked) -> Option<Ordering> {
    for (x, y) in a.iter().zip(b) {
        match compare(x, y, unranked)? {
            Ordering::Equal => continue,
            other => return Some(other),
        }
    }
    Some(a.len().cmp(&b.len()))
}

fn object_collate(a: &Map, b: &Map, unranked: Unranked) -> Option<Ordering> {
    for ((ak, av), (bk, bv)) in a.iter().zip(b.iter()) {
        let keys = ak.cmp(bk);
        if keys != Ordering::Equal {
            return Some(keys);
        }
        match compare(av, bv, unranked)? {
            Ordering::Equal => continue,
            other => return Some(other),
        }
    }
    Some(a.len().cmp(&b.len()))
}
