//! Error types for collation, index-key encoding and decoding.
//!
//! Comparing and normalizing in-domain values never fails. Errors come from
//! three places:
//!
//! - **Encoding**: an [`Opaque`](crate::Opaque) value has no indexable form
//! - **Decoding**: a malformed index key, reported with its byte offset
//! - **Serde bridge**: a Rust type that cannot be represented as a [`Value`](crate::Value)
//!
//! ## Examples
//!
//! ```rust
//! use serde_collate::{parse_indexable_string, Error};
//!
//! let result = parse_indexable_string("9");
//! assert!(matches!(result, Err(Error::Syntax { offset: 0, .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed index key
    #[error("Syntax error at offset {offset}: {msg}")]
    Syntax { offset: usize, msg: String },

    /// Index key nests deeper than the decoder allows
    #[error("Recursion limit exceeded at offset {offset}")]
    RecursionLimit { offset: usize },

    /// Value kind that has no collation or encoding
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at the given byte offset of an index key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_collate::Error;
    ///
    /// let err = Error::syntax(4, "missing terminator");
    /// assert!(err.to_string().contains("offset 4"));
    /// ```
    pub fn syntax(offset: usize, msg: &str) -> Self {
        Error::Syntax {
            offset,
            msg: msg.to_string(),
        }
    }

    /// Creates a recursion-limit error at the given byte offset.
    pub fn recursion_limit(offset: usize) -> Self {
        Error::RecursionLimit { offset }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_collate::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
