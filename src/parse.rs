//! Index key decoding.
//!
//! [`parse_indexable_string`] reverses [`to_indexable_string`](crate::to_indexable_string),
//! so keys read back from a sorted store can be turned into values again.
//!
//! ## Usage
//!
//! ```rust
//! use serde_collate::{parse_indexable_string, to_indexable_string, value};
//!
//! let key = to_indexable_string(&value!(["user", 42, {"active": true}])).unwrap();
//! let value = parse_indexable_string(&key).unwrap();
//! assert_eq!(value, value!(["user", 42, {"active": true}]));
//! ```
//!
//! ## Fidelity
//!
//! The result is always a normalized value: dates come back as strings and
//! undefined as null. Integral numbers within ±2^53 come back as
//! [`Number::Integer`], everything else as [`Number::Float`]. Only keys the
//! encoder can produce are accepted, so re-encoding a decoded key reproduces
//! the key exactly.

use crate::index::{
    complement, write_number, ESCAPE, ESCAPE_SELF, MAGNITUDE_DIGITS, MIN_MAGNITUDE, TERMINATOR,
};
use crate::{Error, Map, Number, Rank, Result, Value};

/// Maximum array/object nesting accepted by the decoder.
pub const MAX_DEPTH: usize = 128;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Decodes an index key produced by [`to_indexable_string`](crate::to_indexable_string).
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the byte offset of the problem if the key
/// is malformed or has trailing data, and [`Error::RecursionLimit`] if it
/// nests deeper than [`MAX_DEPTH`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_indexable_string(input: &str) -> Result<Value> {
    let mut parser = Parser::new(input);
    let value = parser.parse_value()?;
    if !parser.at_end() {
        return Err(Error::syntax(parser.position, "trailing characters"));
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    position: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            depth: 0,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn expect_terminator(&mut self) -> Result<()> {
        let start = self.position;
        match self.next_char() {
            Some(TERMINATOR) => Ok(()),
            Some(_) => Err(Error::syntax(start, "expected terminator")),
            None => Err(Error::syntax(start, "unexpected end of key")),
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        let start = self.position;
        let rank = self
            .next_char()
            .and_then(Rank::from_char)
            .ok_or_else(|| Error::syntax(start, "expected a rank digit"))?;

        let value = match rank {
            Rank::Null => Value::Null,
            Rank::Bool => self.parse_bool()?,
            Rank::Number => self.parse_number()?,
            Rank::String => Value::String(self.parse_string()?),
            Rank::Array => Value::Array(self.parse_elements()?),
            Rank::Object => Value::Object(self.parse_pairs()?),
        };

        self.expect_terminator()?;
        Ok(value)
    }

    fn parse_bool(&mut self) -> Result<Value> {
        let start = self.position;
        match self.next_char() {
            Some('1') => Ok(Value::Bool(true)),
            Some('0') => Ok(Value::Bool(false)),
            _ => Err(Error::syntax(start, "expected boolean digit")),
        }
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.position;
        let negative = match self.next_char() {
            Some('1') => return Ok(Value::Number(Number::Integer(0))),
            Some('0') => true,
            Some('2') => false,
            _ => return Err(Error::syntax(start, "expected number sign class")),
        };

        let exponent_start = self.position;
        let exponent_end = exponent_start + MAGNITUDE_DIGITS;
        let digits = self
            .input
            .get(exponent_start..exponent_end)
            .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| Error::syntax(exponent_start, "expected exponent digits"))?;
        let shifted: i32 = digits
            .parse()
            .map_err(|_| Error::syntax(exponent_start, "invalid exponent"))?;
        self.position = exponent_end;
        let exponent = shifted + MIN_MAGNITUDE;
        let exponent = if negative { -exponent } else { exponent };

        let mantissa_start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() || ch == '.' {
                self.next_char();
            } else {
                break;
            }
        }
        let raw = &self.input[mantissa_start..self.position];
        if !well_formed(raw) {
            return Err(Error::syntax(mantissa_start, "invalid mantissa"));
        }
        let mantissa = if negative {
            complement(raw)
        } else {
            raw.to_string()
        };
        if !well_formed(&mantissa) || mantissa.starts_with('0') {
            return Err(Error::syntax(mantissa_start, "mantissa out of range"));
        }

        let magnitude: f64 = format!("{}e{}", mantissa, exponent)
            .parse()
            .map_err(|_| Error::syntax(start, "invalid number"))?;
        if !magnitude.is_finite() {
            return Err(Error::syntax(start, "number out of range"));
        }
        let n = if negative { -magnitude } else { magnitude };
        if number_body(n) != self.input[start..self.position] {
            return Err(Error::syntax(start, "non-canonical number"));
        }

        if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
            Ok(Value::Number(Number::Integer(n as i64)))
        } else {
            Ok(Value::Number(Number::Float(n)))
        }
    }

    /// Reads an escaped string body, leaving the terminator unconsumed.
    fn parse_string(&mut self) -> Result<String> {
        let mut output = String::new();
        loop {
            let start = self.position;
            match self.peek_char() {
                Some(TERMINATOR) => return Ok(output),
                None => return Err(Error::syntax(start, "unterminated string")),
                Some(ESCAPE) => {
                    self.next_char();
                    match self.next_char() {
                        Some(ESCAPE) => output.push(TERMINATOR),
                        Some(ESCAPE_SELF) => output.push(ESCAPE),
                        _ => return Err(Error::syntax(start, "invalid escape sequence")),
                    }
                }
                Some(ESCAPE_SELF) => {
                    self.next_char();
                    match self.next_char() {
                        Some(ESCAPE_SELF) => output.push(ESCAPE_SELF),
                        _ => return Err(Error::syntax(start, "invalid escape sequence")),
                    }
                }
                Some(ch) => {
                    self.next_char();
                    output.push(ch);
                }
            }
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::recursion_limit(self.position));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Reads encoded values up to (not including) the closing terminator.
    fn parse_elements(&mut self) -> Result<Vec<Value>> {
        self.enter()?;
        let mut elements = Vec::new();
        loop {
            match self.peek_char() {
                Some(TERMINATOR) => break,
                None => return Err(Error::syntax(self.position, "unterminated array")),
                Some(_) => elements.push(self.parse_value()?),
            }
        }
        self.leave();
        Ok(elements)
    }

    fn parse_pairs(&mut self) -> Result<Map> {
        let start = self.position;
        let mut map = Map::new();
        for pair in self.parse_elements()? {
            let (key, value) = match pair {
                Value::Array(mut entry) if entry.len() == 2 => {
                    let value = entry.pop();
                    match (entry.pop(), value) {
                        (Some(Value::String(key)), Some(value)) => (key, value),
                        _ => return Err(Error::syntax(start, "object key must be a string")),
                    }
                }
                _ => return Err(Error::syntax(start, "expected [key, value] pair")),
            };
            map.insert(key, value);
        }
        Ok(map)
    }
}

/// `d` or `d.ddd` with a non-zero last fractional digit.
fn well_formed(mantissa: &str) -> bool {
    match mantissa.as_bytes() {
        [d] => d.is_ascii_digit(),
        [d, b'.', middle @ .., last] => {
            d.is_ascii_digit()
                && middle.iter().all(u8::is_ascii_digit)
                && matches!(last, b'1'..=b'9')
        }
        _ => false,
    }
}

fn number_body(n: f64) -> String {
    let mut body = String::new();
    write_number(n, &mut body);
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{to_indexable_string, value};

    fn round_trip(value: &Value) -> Value {
        let key = to_indexable_string(value).unwrap();
        parse_indexable_string(&key).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(round_trip(&Value::Null), Value::Null);
        assert_eq!(round_trip(&Value::Undefined), Value::Null);
        assert_eq!(round_trip(&value!(true)), value!(true));
        assert_eq!(round_trip(&value!(false)), value!(false));
        assert_eq!(round_trip(&value!("")), value!(""));
        assert_eq!(
            round_trip(&value!("a\u{0}b\u{1}c\u{2}d")),
            value!("a\u{0}b\u{1}c\u{2}d")
        );
        assert_eq!(round_trip(&value!("héllo wörld")), value!("héllo wörld"));
    }

    #[test]
    fn test_numbers() {
        for n in [0, 1, -1, 42, -42, 1000, -999_999, i32::MAX as i64, i32::MIN as i64] {
            assert_eq!(round_trip(&Value::from(n)), Value::from(n));
        }
        for f in [1.5, -1.5, 0.25, -0.3, 2.5e-10, -7.75e12, 1.0e300, -1.0e-300] {
            assert_eq!(round_trip(&Value::from(f)), Value::from(f));
        }
        assert_eq!(round_trip(&value!(3.0)), value!(3));
        assert_eq!(round_trip(&value!(-0.0)), value!(0));
    }

    #[test]
    fn test_containers() {
        let value = value!({
            "name": "Alice",
            "tags": ["a", "b", []],
            "nested": {"x": null, "y": [1, {}]}
        });
        assert_eq!(round_trip(&value), value);
        assert_eq!(round_trip(&value!([])), value!([]));
        assert_eq!(round_trip(&value!({})), value!({}));
    }

    #[test]
    fn test_object_key_order_survives() {
        let decoded = round_trip(&value!({"b": 1, "a": 2}));
        let keys: Vec<&str> = decoded
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_syntax_errors() {
        let cases: &[(&str, usize)] = &[
            ("", 0),
            ("7\0", 0),
            ("1", 1),
            ("1\0x", 2),
            ("23\0", 1),
            ("39\0", 1),
            ("32x1\0", 2),
            ("4abc", 4),
            ("4a\u{1}x\0", 2),
            ("4a\u{2}\0", 2),
            ("5", 1),
            ("621\0\0", 1),
        ];
        for (input, offset) in cases {
            match parse_indexable_string(input) {
                Err(Error::Syntax { offset: found, .. }) => {
                    assert_eq!(found, *offset, "input {:?}", input)
                }
                other => panic!("expected syntax error for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_non_canonical_numbers() {
        let cases: &[(&str, usize)] = &[
            ("32321.50\0", 5),
            ("32321.\0", 5),
            ("32324.5\0", 5),
            ("303240\0", 5),
            ("303249.5\0", 5),
            ("32324\0", 5),
            ("323241.00000000000000000001\0", 1),
            ("300001\0", 1),
        ];
        for (input, offset) in cases {
            match parse_indexable_string(input) {
                Err(Error::Syntax { offset: found, .. }) => {
                    assert_eq!(found, *offset, "input {:?}", input)
                }
                other => panic!("expected syntax error for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_number_out_of_range() {
        assert!(matches!(
            parse_indexable_string("329991\0"),
            Err(Error::Syntax { .. })
        ));
        assert!(matches!(
            parse_indexable_string("3232412\0"),
            Err(Error::Syntax { offset: 5, .. })
        ));
    }

    #[test]
    fn test_decoded_numbers_re_encode_exactly() {
        for n in [
            0.1,
            -0.1,
            1.0 / 3.0,
            -2.0 / 3.0,
            2047.9999990463257,
            -9.999999999999998,
            f64::MAX,
            f64::MIN,
            f64::MIN_POSITIVE,
            5e-324,
            -5e-324,
            1000.0000000000001,
            -1000.0000000000001,
        ] {
            let key = to_indexable_string(&Value::from(n)).unwrap();
            let decoded = parse_indexable_string(&key).unwrap();
            assert_eq!(decoded.as_f64(), Some(n), "{}", n);
            assert_eq!(to_indexable_string(&decoded).unwrap(), key, "{}", n);
        }
    }

    #[test]
    fn test_recursion_limit() {
        let depth = MAX_DEPTH + 1;
        let key = format!("{}{}", "5".repeat(depth), "\0".repeat(depth));
        assert!(matches!(
            parse_indexable_string(&key),
            Err(Error::RecursionLimit { .. })
        ));

        let ok = format!("{}{}", "5".repeat(MAX_DEPTH), "\0".repeat(MAX_DEPTH));
        assert!(parse_indexable_string(&ok).is_ok());
    }
}
