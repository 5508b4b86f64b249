//! The scheme-qualified identifier value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{validation, GlobalIdError, SchemeId};

/// An identifier value qualified by its ISO 6523 scheme.
///
/// Construction never validates: any scheme code and any value are stored
/// verbatim. The rendered form (`Display`, [`as_str`](Self::as_str)) is the
/// value alone; the scheme code is only reachable through the accessors and
/// the qualified notation.
///
/// Wrapping a bare string (`from_string`, `From<&str>`, `From<String>`)
/// always yields the unknown scheme `0000`; no scheme is inferred.
///
/// # Example
///
/// ```
/// use global_id::{GlobalId, SchemeId};
///
/// let gln = GlobalId::new(SchemeId::Gln, "4000001123452");
/// assert_eq!(gln.to_string(), "4000001123452");
/// assert_eq!(gln.scheme_code(), "0088");
///
/// let bare: GlobalId = "4000001123452".into();
/// assert_eq!(bare.scheme_code(), "0000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GlobalId {
    #[serde(rename = "schemeCode", default)]
    scheme: SchemeId,
    #[serde(default)]
    value: String,
}

impl GlobalId {
    /// Creates an identifier from a scheme and a value, stored verbatim.
    ///
    /// `scheme` accepts a [`SchemeId`] or a code string; unlisted codes are
    /// kept as [`SchemeId::Other`].
    #[must_use]
    pub fn new(scheme: impl Into<SchemeId>, value: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            value: value.into(),
        }
    }

    /// Wraps a bare string with the unknown scheme (`0000`).
    #[must_use]
    pub fn from_string(value: impl Into<String>) -> Self {
        Self::new(SchemeId::Unknown, value)
    }

    /// Parses qualified notation: `{scheme}:{value}`.
    ///
    /// Splits on the first `:`. The scheme must be four ASCII digits; the
    /// value is taken verbatim and may be empty or contain further colons.
    pub fn parse_qualified(s: &str) -> Result<Self, GlobalIdError> {
        if s.is_empty() {
            return Err(GlobalIdError::Empty);
        }

        let Some((code, value)) = s.split_once(':') else {
            return Err(GlobalIdError::MissingSeparator);
        };

        let scheme = SchemeId::parse(code)?;
        Ok(Self::new(scheme, value))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the rendered form, which is the value alone.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn scheme(&self) -> &SchemeId {
        &self.scheme
    }

    /// Returns the scheme code string, e.g. `"0088"`.
    #[must_use]
    pub fn scheme_code(&self) -> &str {
        self.scheme.code()
    }

    #[must_use]
    pub fn is_unknown_scheme(&self) -> bool {
        self.scheme.is_unknown()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Formats the identifier as `{scheme}:{value}`.
    #[must_use]
    pub fn to_qualified(&self) -> String {
        format!("{}:{}", self.scheme.code(), self.value)
    }

    /// Consumes the identifier, returning the value.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    /// Checks the value against the format rules of its scheme.
    ///
    /// Fails for an empty value, the unknown scheme, unlisted codes, and
    /// values that break the scheme's length, character or check digit rules.
    pub fn validate(&self) -> Result<(), GlobalIdError> {
        validation::validate(&self.scheme, &self.value)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for GlobalId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<&str> for GlobalId {
    fn from(value: &str) -> Self {
        Self::from_string(value)
    }
}

impl From<String> for GlobalId {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl From<GlobalId> for String {
    fn from(id: GlobalId) -> Self {
        id.value
    }
}

// =============================================================================
// Tests
// =============================================================================
