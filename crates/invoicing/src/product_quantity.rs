use core::ops::Add;

use serde::{Deserialize, Serialize};

use playground_core::{DomainError, DomainResult, ValueObject};

/// Largest quantity a single invoice line may carry.
pub const MAX_QUANTITY: i32 = 200;

/// Quantity of a product on an invoice line, in `1..=200`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ProductQuantity(i32);

impl ProductQuantity {
    pub fn new(quantity: i32) -> DomainResult<Self> {
        if quantity <= 0 || quantity > MAX_QUANTITY {
            return Err(DomainError::validation(format!(
                "quantity must be in 1..={MAX_QUANTITY} (got {quantity})"
            )));
        }
        Ok(Self(quantity))
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Sum of two quantities, validated like any other construction.
    ///
    /// Never clamps: a sum above the maximum is an error.
    pub fn checked_add(self, other: Self) -> DomainResult<Self> {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or_else(|| DomainError::validation("quantity sum overflow"))?;
        Self::new(sum)
    }
}

impl ValueObject for ProductQuantity {}

impl Add for ProductQuantity {
    type Output = DomainResult<ProductQuantity>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl TryFrom<i32> for ProductQuantity {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductQuantity> for i32 {
    fn from(value: ProductQuantity) -> Self {
        value.0
    }
}

impl core::fmt::Display for ProductQuantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bounds_are_inclusive_of_max_only() {
        assert!(ProductQuantity::new(0).is_err());
        assert_eq!(ProductQuantity::new(1).unwrap().value(), 1);
        assert_eq!(ProductQuantity::new(200).unwrap().value(), 200);
        assert!(ProductQuantity::new(201).is_err());
    }

    #[test]
    fn addition_out_of_range_fails_instead_of_clamping() {
        let a = ProductQuantity::new(150).unwrap();
        let b = ProductQuantity::new(51).unwrap();
        match (a + b).unwrap_err() {
            DomainError::Validation(msg) if msg.contains("got 201") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn deserialization_validates() {
        assert_eq!(serde_json::from_str::<ProductQuantity>("42").unwrap().value(), 42);
        assert!(serde_json::from_str::<ProductQuantity>("0").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 1000,
            ..ProptestConfig::default()
        })]

        /// Property: construction succeeds exactly for values in the allowed range.
        #[test]
        fn construction_matches_range(q in any::<i32>()) {
            let result = ProductQuantity::new(q);
            if q > 0 && q <= MAX_QUANTITY {
                prop_assert_eq!(result.unwrap().value(), q);
            } else {
                prop_assert!(matches!(result, Err(DomainError::Validation(_))));
            }
        }

        /// Property: addition succeeds iff the sum is still in range.
        #[test]
        fn addition_respects_range(a in 1..=MAX_QUANTITY, b in 1..=MAX_QUANTITY) {
            let sum = ProductQuantity::new(a).unwrap() + ProductQuantity::new(b).unwrap();
            if a + b <= MAX_QUANTITY {
                prop_assert_eq!(sum.unwrap().value(), a + b);
            } else {
                prop_assert!(matches!(sum, Err(DomainError::Validation(_))));
            }
        }
    }
}
