//! ISO 6523 scheme codes.
//!
//! The set of schemes is closed in spirit but open in representation: any
//! code string can be carried, and codes outside the known list are kept
//! verbatim in [`SchemeId::Other`].

use std::fmt;
use std::str::FromStr;

use crate::GlobalIdError;

// =============================================================================
// Code Constants
// =============================================================================

/// Literal ISO 6523 ICD values for the supported schemes.
pub mod scheme_codes {
    /// SIRENE (Systeme d'Information et Repertoire des Entreprises et des Etablissements).
    pub const SIRENE: &str = "0002";
    /// SIRET establishment code.
    pub const SIRET: &str = "0009";
    /// SWIFT (BIC).
    pub const SWIFT: &str = "0021";
    /// D-U-N-S Number.
    pub const DUNS: &str = "0060";
    /// GS1 Global Location Number (GLN).
    pub const GLN: &str = "0088";
    /// GS1 Global Trade Item Number (GTIN, EAN).
    pub const EAN: &str = "0160";
    /// OSCAR (Odette).
    pub const ODETTE: &str = "0177";
    /// Numero d'entreprise / ondernemingsnummer / Unternehmensnummer.
    pub const COMPANY_NUMBER: &str = "0208";
    /// Sentinel for an identifier whose scheme is not known.
    pub const UNKNOWN: &str = "0000";
}

// =============================================================================
// SchemeId
// =============================================================================

/// A scheme code that is not one of the known schemes.
///
/// Only [`SchemeId::from_code`] creates these, so a known code is never
/// wrapped here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnrecognizedCode(String);

impl UnrecognizedCode {
    /// Returns the code exactly as it was supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The identification scheme an identifier value belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemeId {
    Sirene,
    Siret,
    Swift,
    Duns,
    Gln,
    Ean,
    Odette,
    CompanyNumber,
    #[default]
    Unknown,
    /// Any other code, kept verbatim.
    Other(UnrecognizedCode),
}

impl SchemeId {
    /// All real schemes, in code order. Excludes `Unknown`.
    pub const RECOGNIZED: &'static [SchemeId] = &[
        SchemeId::Sirene,
        SchemeId::Siret,
        SchemeId::Swift,
        SchemeId::Duns,
        SchemeId::Gln,
        SchemeId::Ean,
        SchemeId::Odette,
        SchemeId::CompanyNumber,
    ];

    /// Maps a code string to its scheme.
    ///
    /// Never fails: anything that is not a known code, including malformed
    /// strings, is kept as [`SchemeId::Other`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            scheme_codes::SIRENE => SchemeId::Sirene,
            scheme_codes::SIRET => SchemeId::Siret,
            scheme_codes::SWIFT => SchemeId::Swift,
            scheme_codes::DUNS => SchemeId::Duns,
            scheme_codes::GLN => SchemeId::Gln,
            scheme_codes::EAN => SchemeId::Ean,
            scheme_codes::ODETTE => SchemeId::Odette,
            scheme_codes::COMPANY_NUMBER => SchemeId::CompanyNumber,
            scheme_codes::UNKNOWN => SchemeId::Unknown,
            other => SchemeId::Other(UnrecognizedCode(other.to_string())),
        }
    }

    /// Parses a scheme code strictly.
    ///
    /// The code must be exactly four ASCII digits. Well-formed codes that are
    /// not in the known list still succeed as [`SchemeId::Other`].
    pub fn parse(code: &str) -> Result<Self, GlobalIdError> {
        if code.len() != 4 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GlobalIdError::InvalidSchemeCode {
                code: code.to_string(),
            });
        }
        Ok(Self::from_code(code))
    }

    /// Returns the literal code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            SchemeId::Sirene => scheme_codes::SIRENE,
            SchemeId::Siret => scheme_codes::SIRET,
            SchemeId::Swift => scheme_codes::SWIFT,
            SchemeId::Duns => scheme_codes::DUNS,
            SchemeId::Gln => scheme_codes::GLN,
            SchemeId::Ean => scheme_codes::EAN,
            SchemeId::Odette => scheme_codes::ODETTE,
            SchemeId::CompanyNumber => scheme_codes::COMPANY_NUMBER,
            SchemeId::Unknown => scheme_codes::UNKNOWN,
            SchemeId::Other(code) => code.as_str(),
        }
    }

    /// Short name used in reports and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SchemeId::Sirene => "SIRENE",
            SchemeId::Siret => "SIRET",
            SchemeId::Swift => "BIC",
            SchemeId::Duns => "DUNS",
            SchemeId::Gln => "GLN",
            SchemeId::Ean => "GTIN",
            SchemeId::Odette => "ODETTE",
            SchemeId::CompanyNumber => "COMPANY_NUMBER",
            SchemeId::Unknown => "UNKNOWN",
            SchemeId::Other(_) => "OTHER",
        }
    }

    /// Human readable description of the scheme.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SchemeId::Sirene => "SIRENE company register",
            SchemeId::Siret => "SIRET establishment code",
            SchemeId::Swift => "SWIFT bank identifier code",
            SchemeId::Duns => "D-U-N-S number",
            SchemeId::Gln => "GS1 global location number",
            SchemeId::Ean => "GS1 global trade item number",
            SchemeId::Odette => "Odette (OSCAR) identifier",
            SchemeId::CompanyNumber => "Company number",
            SchemeId::Unknown => "Unknown scheme",
            SchemeId::Other(_) => "Unrecognized scheme",
        }
    }

    /// Returns true for the eight real schemes.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, SchemeId::Unknown | SchemeId::Other(_))
    }

    /// Returns true for the `0000` sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, SchemeId::Unknown)
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SchemeId {
    type Err = GlobalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for SchemeId {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl From<String> for SchemeId {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl serde::Serialize for SchemeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> serde::Deserialize<'de> for SchemeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scheme_code_literals() {
        assert_eq!(scheme_codes::SIRENE, "0002");
        assert_eq!(scheme_codes::SIRET, "0009");
        assert_eq!(scheme_codes::SWIFT, "0021");
        assert_eq!(scheme_codes::DUNS, "0060");
        assert_eq!(scheme_codes::GLN, "0088");
        assert_eq!(scheme_codes::EAN, "0160");
        assert_eq!(scheme_codes::ODETTE, "0177");
        assert_eq!(scheme_codes::COMPANY_NUMBER, "0208");
        assert_eq!(scheme_codes::UNKNOWN, "0000");
    }

    #[test]
    fn test_variant_codes_match_constants() {
        assert_eq!(SchemeId::Gln.code(), scheme_codes::GLN);
        assert_eq!(SchemeId::Ean.code(), scheme_codes::EAN);
        assert_eq!(SchemeId::Unknown.code(), scheme_codes::UNKNOWN);
        for scheme in SchemeId::RECOGNIZED {
            assert_eq!(&SchemeId::from_code(scheme.code()), scheme);
        }
    }

    #[test]
    fn test_recognized_codes_unique_and_sorted() {
        let codes: Vec<&str> = SchemeId::RECOGNIZED.iter().map(|s| s.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(codes, sorted);
        assert!(!codes.contains(&scheme_codes::UNKNOWN));
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(SchemeId::default(), SchemeId::Unknown);
        assert!(SchemeId::default().is_unknown());
        assert!(!SchemeId::default().is_recognized());
    }

    #[test]
    fn test_from_code_keeps_unlisted_code() {
        let scheme = SchemeId::from_code("9930");
        assert!(matches!(scheme, SchemeId::Other(_)));
        assert_eq!(scheme.code(), "9930");
        assert_eq!(scheme.name(), "OTHER");
        assert!(!scheme.is_recognized());
    }

    #[test]
    fn test_from_code_accepts_malformed() {
        let scheme = SchemeId::from_code("GLN");
        assert_eq!(scheme.code(), "GLN");
        assert_eq!(SchemeId::from_code("").code(), "");
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(SchemeId::parse("0088").unwrap(), SchemeId::Gln);
        assert_eq!("0160".parse::<SchemeId>().unwrap(), SchemeId::Ean);
        assert_eq!(SchemeId::parse("9915").unwrap().code(), "9915");

        for bad in ["", "88", "00888", "00a8", "GLN ", "٠٠٨٨"] {
            let err = SchemeId::parse(bad).unwrap_err();
            assert!(
                matches!(err, GlobalIdError::InvalidSchemeCode { .. }),
                "{bad:?} should be rejected"
            );
            assert!(err.is_scheme_error());
        }
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(SchemeId::Siret.to_string(), "0009");
        assert_eq!(SchemeId::from_code("1234").to_string(), "1234");
    }

    #[test]
    fn test_json_is_bare_code() {
        let json = serde_json::to_string(&SchemeId::Duns).unwrap();
        assert_eq!(json, "\"0060\"");

        let parsed: SchemeId = serde_json::from_str("\"0177\"").unwrap();
        assert_eq!(parsed, SchemeId::Odette);

        let parsed: SchemeId = serde_json::from_str("\"not-a-code\"").unwrap();
        assert_eq!(parsed.code(), "not-a-code");
    }

    proptest! {
        #[test]
        fn prop_from_code_preserves_code(code in ".*") {
            let scheme = SchemeId::from_code(&code);
            prop_assert_eq!(scheme.code(), code.as_str());
        }

        #[test]
        fn prop_parse_accepts_four_digits(code in "[0-9]{4}") {
            let scheme = SchemeId::parse(&code).unwrap();
            prop_assert_eq!(scheme.code(), code.as_str());
        }
    }
}
