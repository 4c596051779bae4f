//! Error types for conversion, parsing and serialization.
//!
//! Identification helpers never fail; they answer `true` or `false`. Everything
//! that produces a value returns [`Result`], and a value that cannot become the
//! requested kind is always reported the same way: [`Error::Conversion`].
//!
//! ## Error Categories
//!
//! - **Conversion**: the input is not representable as the target [`Kind`]
//! - **Invalid format**: a strftime-style format string is malformed
//! - **Invalid argument**: a helper was called with an argument it cannot use
//! - **Serialization / Deserialization**: the JSON layer rejected the data
//!
//! ## Examples
//!
//! ```rust
//! use datautils::convert::str_to_int;
//! use datautils::{Error, Kind};
//!
//! let err = str_to_int("12.3").unwrap_err();
//! assert!(matches!(err, Error::Conversion { target: Kind::Int, .. }));
//! assert_eq!(err.to_string(), "Failed to convert 12.3 to int");
//! ```

use crate::Kind;
use std::fmt;
use thiserror::Error;

/// Represents every failure a datautils helper can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The value is not representable as the target kind.
    #[error("Failed to convert {value} to {target}")]
    Conversion { value: String, target: Kind },

    /// A date/time format string contains an unknown or unusable directive.
    #[error("Invalid format string {0:?}")]
    InvalidFormat(String),

    /// A helper received an argument outside its domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Producing the serialized text failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The input text is not a serialized value.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a conversion error for `value` and the kind it failed to become.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datautils::{Error, Kind};
    ///
    /// let err = Error::conversion("abc", Kind::Uuid);
    /// assert_eq!(err.to_string(), "Failed to convert abc to uuid");
    /// ```
    pub fn conversion<V: fmt::Display>(value: V, target: Kind) -> Self {
        Error::Conversion {
            value: value.to_string(),
            target,
        }
    }

    /// Creates an invalid format error for a malformed format string.
    pub fn invalid_format(format: &str) -> Self {
        Error::InvalidFormat(format.to_string())
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(msg: &str) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    pub fn serialization<T: fmt::Display>(msg: T) -> Self {
        Error::Serialization(msg.to_string())
    }

    pub fn deserialization<T: fmt::Display>(msg: T) -> Self {
        Error::Deserialization(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datautils::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the target kind when this is a conversion error.
    #[must_use]
    pub fn target(&self) -> Option<Kind> {
        match self {
            Error::Conversion { target, .. } => Some(*target),
            _ => None,
        }
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
