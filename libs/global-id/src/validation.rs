//! Opt-in format rules for identifier values.
//!
//! Nothing in construction or conversion calls into this module.

use crate::{gs1, GlobalIdError, SchemeId};

/// SIREN of La Poste, whose establishments use a digit-sum rule instead of Luhn.
const LA_POSTE_SIREN: &str = "356000000";

/// Checks `value` against the rules of `scheme`.
pub(crate) fn validate(scheme: &SchemeId, value: &str) -> Result<(), GlobalIdError> {
    if value.is_empty() {
        return Err(GlobalIdError::EmptyValue);
    }

    match scheme {
        SchemeId::Unknown => Err(GlobalIdError::UnknownScheme),
        SchemeId::Other(code) => Err(GlobalIdError::UnrecognizedScheme {
            code: code.as_str().to_string(),
        }),
        SchemeId::Gln => {
            digits("GLN", value, &[13], "13")?;
            check_gs1("GLN", value)
        }
        SchemeId::Ean => {
            digits("GTIN", value, &[8, 12, 13, 14], "8, 12, 13 or 14")?;
            check_gs1("GTIN", value)
        }
        SchemeId::Sirene => {
            digits("SIREN", value, &[9], "9")?;
            check_luhn("SIREN", value)
        }
        SchemeId::Siret => {
            digits("SIRET", value, &[14], "14")?;
            if value.starts_with(LA_POSTE_SIREN) {
                let sum: u32 = value.bytes().map(|b| u32::from(b - b'0')).sum();
                if sum % 5 == 0 {
                    Ok(())
                } else {
                    Err(GlobalIdError::InvalidCheckDigit { scheme: "SIRET" })
                }
            } else {
                check_luhn("SIRET", value)
            }
        }
        SchemeId::Duns => digits("DUNS", value, &[9], "9"),
        SchemeId::Swift => bic(value),
        SchemeId::CompanyNumber => company_number(value),
        SchemeId::Odette => Ok(()),
    }
}

/// Requires ASCII digits only, with one of the allowed lengths.
fn digits(
    scheme: &'static str,
    value: &str,
    lengths: &[usize],
    expected: &'static str,
) -> Result<(), GlobalIdError> {
    if let Some((i, c)) = value.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(GlobalIdError::InvalidCharacter {
            scheme,
            position: i + 1,
            character: c,
        });
    }
    if !lengths.contains(&value.len()) {
        return Err(GlobalIdError::InvalidLength {
            scheme,
            expected,
            actual: value.len(),
        });
    }
    Ok(())
}

fn check_gs1(scheme: &'static str, value: &str) -> Result<(), GlobalIdError> {
    if gs1::has_valid_check_digit(value) {
        Ok(())
    } else {
        Err(GlobalIdError::InvalidCheckDigit { scheme })
    }
}

/// Luhn over a digit-only string.
fn check_luhn(scheme: &'static str, value: &str) -> Result<(), GlobalIdError> {
    let sum: u32 = value
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    if sum % 10 == 0 {
        Ok(())
    } else {
        Err(GlobalIdError::InvalidCheckDigit { scheme })
    }
}

/// BIC: 4 letter bank code, 2 letter country, 2 char location, optional 3 char branch.
fn bic(value: &str) -> Result<(), GlobalIdError> {
    for (i, c) in value.chars().enumerate() {
        let ok = if i < 6 {
            c.is_ascii_uppercase()
        } else {
            c.is_ascii_uppercase() || c.is_ascii_digit()
        };
        if !ok {
            return Err(GlobalIdError::InvalidCharacter {
                scheme: "BIC",
                position: i + 1,
                character: c,
            });
        }
    }

    let len = value.len();
    if len != 8 && len != 11 {
        return Err(GlobalIdError::InvalidLength {
            scheme: "BIC",
            expected: "8 or 11",
            actual: len,
        });
    }
    Ok(())
}

/// Belgian enterprise number: 10 digits, mod-97 check over the last two.
fn company_number(value: &str) -> Result<(), GlobalIdError> {
    digits("COMPANY_NUMBER", value, &[10], "10")?;

    if !value.starts_with(['0', '1']) {
        return Err(GlobalIdError::InvalidCharacter {
            scheme: "COMPANY_NUMBER",
            position: 1,
            character: value.chars().next().unwrap_or_default(),
        });
    }

    let (base, check) = value.split_at(8);
    let base: u64 = base
        .parse()
        .map_err(|_| GlobalIdError::InvalidCheckDigit { scheme: "COMPANY_NUMBER" })?;
    let check: u64 = check
        .parse()
        .map_err(|_| GlobalIdError::InvalidCheckDigit { scheme: "COMPANY_NUMBER" })?;

    if 97 - base % 97 == check {
        Ok(())
    } else {
        Err(GlobalIdError::InvalidCheckDigit { scheme: "COMPANY_NUMBER" })
    }
}
