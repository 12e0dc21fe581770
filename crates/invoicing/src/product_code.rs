use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use playground_core::{DomainError, DomainResult, ValueObject};

/// Number of characters in every product code.
pub const PRODUCT_CODE_LEN: usize = 7;

static PRODUCT_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}[0-9]{3}$").expect("product code pattern is a valid regex")
});

/// Product code: four uppercase ASCII letters followed by three digits
/// (e.g. `ABCD123`).
///
/// Used as the key of an invoice's lines, so equality and hashing are by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();

        let len = code.chars().count();
        if len != PRODUCT_CODE_LEN {
            return Err(DomainError::validation(format!(
                "product code must be {PRODUCT_CODE_LEN} characters long (got {len})"
            )));
        }
        if !PRODUCT_CODE_PATTERN.is_match(&code) {
            return Err(DomainError::validation(format!(
                "product code '{code}' must be 4 uppercase letters followed by 3 digits"
            )));
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ProductCode {}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for ProductCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProductCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductCode> for String {
    fn from(value: ProductCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_well_formed_code() {
        let code = ProductCode::new("ABCD123").unwrap();
        assert_eq!(code.as_str(), "ABCD123");
        assert_eq!(code.to_string(), "ABCD123");
    }

    #[test]
    fn rejects_wrong_length() {
        for input in ["", "ABC123", "ABCD1234", "ABCDE123"] {
            let err = ProductCode::new(input).unwrap_err();
            match err {
                DomainError::Validation(msg) if msg.contains("7 characters") => {}
                other => panic!("expected length validation error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_wrong_shape() {
        for input in ["abcd123", "ABC1234", "ABCDEFG", "1234ABC", "ABCD12X", "ABÇD123"] {
            assert!(
                matches!(ProductCode::new(input), Err(DomainError::Validation(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn equal_codes_are_interchangeable_as_keys() {
        let mut set = std::collections::HashSet::new();
        set.insert(ProductCode::new("WXYZ999").unwrap());
        assert!(set.contains(&"WXYZ999".parse::<ProductCode>().unwrap()));
    }

    #[test]
    fn deserialization_validates() {
        let ok: ProductCode = serde_json::from_str("\"MIKE456\"").unwrap();
        assert_eq!(ok.as_str(), "MIKE456");
        assert!(serde_json::from_str::<ProductCode>("\"mike456\"").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: every string of the documented shape is accepted and round-trips.
        #[test]
        fn valid_codes_round_trip(code in "[A-Z]{4}[0-9]{3}") {
            let parsed = ProductCode::new(code.clone()).unwrap();
            prop_assert_eq!(parsed.as_str(), code.as_str());
        }

        /// Property: anything that does not have the documented shape is rejected.
        #[test]
        fn invalid_codes_are_rejected(code in ".{0,12}") {
            let well_formed = code.chars().count() == PRODUCT_CODE_LEN
                && code.chars().take(4).all(|c| c.is_ascii_uppercase())
                && code.chars().skip(4).all(|c| c.is_ascii_digit());
            prop_assume!(!well_formed);
            prop_assert!(matches!(ProductCode::new(code), Err(DomainError::Validation(_))));
        }
    }
}
