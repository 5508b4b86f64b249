//! Error types for scheme parsing and identifier validation.

use thiserror::Error;

/// Errors returned by the opt-in strict operations.
///
/// Construction and string conversion never fail; these errors only come
/// from [`SchemeId::parse`](crate::SchemeId::parse),
/// [`GlobalId::parse_qualified`](crate::GlobalId::parse_qualified) and
/// [`GlobalId::validate`](crate::GlobalId::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GlobalIdError {
    /// The input string is empty.
    #[error("identifier cannot be empty")]
    Empty,

    /// The identifier value is empty.
    #[error("identifier value cannot be empty")]
    EmptyValue,

    /// Qualified notation without the `:` separator.
    #[error("qualified identifier missing ':' separator")]
    MissingSeparator,

    /// The scheme code is not four ASCII digits.
    #[error("invalid scheme code '{code}': expected four digits")]
    InvalidSchemeCode { code: String },

    /// The identifier carries the unknown scheme sentinel.
    #[error("identifier has unknown scheme (0000)")]
    UnknownScheme,

    /// The scheme code is well-formed but not one of the known schemes.
    #[error("unrecognized scheme code '{code}'")]
    UnrecognizedScheme { code: String },

    /// The value has the wrong length for its scheme.
    #[error("invalid {scheme} length: expected {expected}, got {actual}")]
    InvalidLength {
        scheme: &'static str,
        expected: &'static str,
        actual: usize,
    },

    /// The value contains a character its scheme does not allow.
    #[error("invalid {scheme} character '{character}' at position {position}")]
    InvalidCharacter {
        scheme: &'static str,
        position: usize,
        character: char,
    },

    /// The value's check digit does not match.
    #[error("invalid {scheme} check digit")]
    InvalidCheckDigit { scheme: &'static str },
}

impl GlobalIdError {
    /// Returns true if this error concerns the scheme rather than the value.
    pub fn is_scheme_error(&self) -> bool {
        matches!(
            self,
            GlobalIdError::InvalidSchemeCode { .. }
                | GlobalIdError::UnknownScheme
                | GlobalIdError::UnrecognizedScheme { .. }
        )
    }

    /// Returns true if the value is malformed for its scheme.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            GlobalIdError::EmptyValue
                | GlobalIdError::InvalidLength { .. }
                | GlobalIdError::InvalidCharacter { .. }
                | GlobalIdError::InvalidCheckDigit { .. }
        )
    }
}
