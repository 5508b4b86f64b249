//! GS1 check digit arithmetic shared by GLN and GTIN.
//!
//! Weights alternate 3 and 1 starting from the rightmost payload digit.

/// Computes the check digit for a payload of ASCII digits.
///
/// Returns `None` if the payload is empty or contains a non-digit.
#[must_use]
pub fn check_digit(payload: &str) -> Option<u8> {
    if payload.is_empty() {
        return None;
    }

    let mut sum: u32 = 0;
    for (i, b) in payload.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return None;
        }
        let weight = if i % 2 == 0 { 3 } else { 1 };
        sum += u32::from(b - b'0') * weight;
    }

    Some(((10 - sum % 10) % 10) as u8)
}

/// Returns true if the last digit of `code` is the check digit of the rest.
#[must_use]
pub fn has_valid_check_digit(code: &str) -> bool {
    let Some((last, payload)) = code.as_bytes().split_last() else {
        return false;
    };
    if !last.is_ascii_digit() {
        return false;
    }

    // The last byte is ASCII, so this is a char boundary.
    check_digit(&code[..payload.len()]) == Some(last - b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_known_codes() {
        assert_eq!(check_digit("400000112345"), Some(2));
        assert_eq!(check_digit("400638133393"), Some(1));
        assert_eq!(check_digit("9638507"), Some(4));
        assert_eq!(check_digit("1061414100041"), Some(5));
    }

    #[test]
    fn test_check_digit_rejects_non_digits() {
        assert_eq!(check_digit(""), None);
        assert_eq!(check_digit("40000011234a"), None);
        assert_eq!(check_digit("4000 0112345"), None);
    }

    #[test]
    fn test_has_valid_check_digit() {
        for code in [
            "4000001123452",
            "4006381333931",
            "96385074",
            "036000291452",
            "10614141000415",
            "5901234123457",
        ] {
            assert!(has_valid_check_digit(code), "{code} should be valid");
        }

        assert!(!has_valid_check_digit("4000001123453"));
        assert!(!has_valid_check_digit("96385075"));
        assert!(!has_valid_check_digit("400000112345X"));
        assert!(!has_valid_check_digit("7"));
        assert!(!has_valid_check_digit(""));
    }

    #[test]
    fn test_trailing_multibyte_char() {
        assert!(!has_valid_check_digit("400000112345é"));
    }
}
