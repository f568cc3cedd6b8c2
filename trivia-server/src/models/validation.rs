//! Validation error types and lenient numeric input

use std::fmt;

use serde::Deserialize;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent (or null)
    Missing { field: &'static str },

    /// Field is blank when it shouldn't be
    Empty { field: &'static str },

    /// Numeric field outside its accepted range
    OutOfRange { field: &'static str, min: i32, max: i32 },

    /// Value could not be interpreted (e.g., non-numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Integer that clients may send either as a JSON number or a numeric string.
///
/// The web front-end posts select-box values verbatim, so `"3"` and `3`
/// both show up for the same field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LenientInt {
    Number(i64),
    Text(String),
}

impl LenientInt {
    /// Resolve to an `i32`, naming `field` in the error.
    pub fn resolve(&self, field: &'static str) -> Result<i32, ValidationError> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
                field,
                reason: "expected an integer",
            })?,
        };

        i32::try_from(value).map_err(|_| ValidationError::InvalidFormat {
            field,
            reason: "integer out of range",
        })
    }
}

impl From<i32> for LenientInt {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}
