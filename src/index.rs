//! Order-preserving index keys.
//!
//! [`to_indexable_string`] encodes a value into a string whose plain
//! byte-wise ordering matches [`collate`](crate::collate). The keys can be
//! stored in any sorted key-value store and range-scanned.
//!
//! ## Layout
//!
//! Every value encodes as `rank digit + body + '\0'`:
//!
//! | Kind | Body |
//! |------|------|
//! | null | empty |
//! | boolean | `1` or `0` |
//! | number | sign class, exponent, mantissa (see below) |
//! | string | the string with `\u{0}`, `\u{1}`, `\u{2}` escaped |
//! | array | each element's encoding, concatenated |
//! | object | each `[key, value]` pair encoded as a two-element array |
//!
//! ## Numbers
//!
//! A number `±m × 10^e` with `m` in `[1, 10)` encodes as:
//!
//! 1. `0` if negative, `2` if positive. Zero is the single digit `1`.
//! 2. `e` (negated for negatives) minus [`MIN_MAGNITUDE`], zero-padded to
//!    [`MAGNITUDE_DIGITS`] digits.
//! 3. the shortest decimal digits of `m` that round-trip, as `{:e}` prints
//!    them. Negatives write the exact decimal `10 - m` instead, computed digit
//!    by digit.
//!
//! ```rust
//! use serde_collate::{to_indexable_string, Value};
//!
//! assert_eq!(to_indexable_string(&Value::from(0)).unwrap(), "31\0");
//! assert_eq!(to_indexable_string(&Value::from(1)).unwrap(), "323241\0");
//! assert_eq!(to_indexable_string(&Value::from(-1)).unwrap(), "303249\0");
//! assert_eq!(to_indexable_string(&Value::from(-1.25)).unwrap(), "303248.75\0");
//! ```
//!
//! Distinct doubles have distinct shortest digits, so every pair of distinct
//! numbers gets distinct keys in the right order.

use crate::normalize::Key;
use crate::{Error, Map, Rank, Result, Value};

/// Smallest decimal exponent of a positive `f64` (`5e-324`).
pub const MIN_MAGNITUDE: i32 = -324;

/// Width of the shifted exponent field.
pub const MAGNITUDE_DIGITS: usize = 3;

/// Ends every encoded value. Never appears unescaped inside a string body.
pub const TERMINATOR: char = '\u{0}';

pub(crate) const ESCAPE: char = '\u{1}';
pub(crate) const ESCAPE_SELF: char = '\u{2}';

/// Encodes `value` into an order-preserving index key.
///
/// For any two in-domain values `a` and `b`,
/// `to_indexable_string(a)?.cmp(&to_indexable_string(b)?) == collate(a, b)`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if `value` contains an
/// [`Opaque`](crate::Opaque) value. All other inputs encode successfully.
///
/// # Examples
///
/// ```rust
/// use serde_collate::{to_indexable_string, value};
///
/// let a = to_indexable_string(&value!(["a", 1])).unwrap();
/// let b = to_indexable_string(&value!(["a", 2])).unwrap();
/// assert!(a < b);
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_indexable_string(value: &Value) -> Result<String> {
    let mut output = String::new();
    write_indexable(value, &mut output)?;
    Ok(output)
}

fn write_indexable(value: &Value, output: &mut String) -> Result<()> {
    let key = Key::of(value);
    let rank = key.rank().ok_or_else(|| {
        Error::unsupported_type(&format!(
            "{} has no indexable encoding",
            value.kind()
        ))
    })?;
    output.push(rank.as_char());
    match key {
        Key::Null | Key::Opaque => {}
        Key::Bool(b) => output.push(if b { '1' } else { '0' }),
        Key::Number(n) => write_number(n, output),
        Key::String(s) => write_escaped(&s, output),
        Key::Array(arr) => {
            for element in arr {
                write_indexable(element, output)?;
            }
        }
        Key::Object(obj) => write_pairs(obj, output)?,
    }
    output.push(TERMINATOR);
    Ok(())
}

fn write_pairs(obj: &Map, output: &mut String) -> Result<()> {
    for (k, v) in obj.iter() {
        output.push(Rank::Array.as_char());
        output.push(Rank::String.as_char());
        write_escaped(k, output);
        output.push(TERMINATOR);
        write_indexable(v, output)?;
        output.push(TERMINATOR);
    }
    Ok(())
}

fn write_escaped(s: &str, output: &mut String) {
    output.reserve(s.len());
    for c in s.chars() {
        match c {
            ESCAPE_SELF => {
                output.push(ESCAPE_SELF);
                output.push(ESCAPE_SELF);
            }
            ESCAPE => {
                output.push(ESCAPE);
                output.push(ESCAPE_SELF);
            }
            TERMINATOR => {
                output.push(ESCAPE);
                output.push(ESCAPE);
            }
            other => output.push(other),
        }
    }
}

/// Writes the numeric body for a finite `n`.
pub(crate) fn write_number(n: f64, output: &mut String) {
    if n == 0.0 {
        output.push('1');
        return;
    }
    let negative = n < 0.0;
    let (mantissa, exponent) = scientific(n.abs());

    output.push(if negative { '0' } else { '2' });

    let magnitude = (if negative { -exponent } else { exponent }) - MIN_MAGNITUDE;
    output.push_str(&format!(
        "{:0width$}",
        magnitude,
        width = MAGNITUDE_DIGITS
    ));

    if negative {
        output.push_str(&complement(&mantissa));
    } else {
        output.push_str(&mantissa);
    }
}

/// Exact decimal `10 - m` for a mantissa written as `d` or `d.ddd`.
///
/// The last digit of `m` must be non-zero. Under that condition the result
/// has the same shape and applying it twice gives `m` back.
pub(crate) fn complement(mantissa: &str) -> String {
    let mut output = String::with_capacity(mantissa.len() + 1);
    let last = mantissa.len().saturating_sub(1);
    for (i, c) in mantissa.char_indices() {
        match c.to_digit(10) {
            Some(d) if i == last => output.push_str(&(10 - d).to_string()),
            Some(d) => output.push(char::from(b'0' + (9 - d) as u8)),
            None => output.push(c),
        }
    }
    output
}

/// Splits a positive finite `x` into its shortest mantissa digits and
/// decimal exponent.
fn scientific(x: f64) -> (String, i32) {
    // `{:e}` prints the shortest round-trip digits, e.g. "1.5e-7" or "1e3"
    let formatted = format!("{:e}", x);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            (mantissa.to_string(), exponent.parse().unwrap_or(0))
        }
        None => (formatted.clone(), 0),
    }
}
