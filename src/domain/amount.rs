//! Ether amount parsing.

use std::str::FromStr;

use alloy_primitives::U256;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Error, Result};

/// Number of decimals of the native token (ether -> wei).
pub const ETHER_DECIMALS: u32 = 18;

/// Convert a decimal ether amount such as `"0.5"` into wei.
///
/// The scaled value is rounded half-to-even to a whole number of wei.
///
/// # Errors
///
/// Returns [`Error::InvalidAmount`] if the string is not a decimal number,
/// is negative, or is too large to represent.
pub fn ether_to_wei(amount: &str) -> Result<U256> {
    let invalid = |reason: &str| Error::InvalidAmount {
        amount: amount.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = amount.trim();
    let ether = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| invalid(&e.to_string()))?;
    if ether.is_sign_negative() && !ether.is_zero() {
        return Err(invalid("amount must not be negative"));
    }

    let scale = Decimal::from(10u64.pow(ETHER_DECIMALS));
    let wei = ether
        .checked_mul(scale)
        .ok_or_else(|| invalid("amount is too large"))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    let wei = wei
        .to_u128()
        .ok_or_else(|| invalid("amount is too large"))?;

    Ok(U256::from(wei))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pow10(exp: u32) -> U256 {
        U256::from(10u64).pow(U256::from(exp))
    }

    #[test]
    fn whole_ether() {
        assert_eq!(ether_to_wei("1").unwrap(), pow10(18));
        assert_eq!(ether_to_wei("12").unwrap(), U256::from(12u64) * pow10(18));
    }

    #[test]
    fn zero() {
        assert_eq!(ether_to_wei("0").unwrap(), U256::ZERO);
        assert_eq!(ether_to_wei("0.0").unwrap(), U256::ZERO);
    }

    #[test]
    fn fractional_ether() {
        assert_eq!(ether_to_wei("0.5").unwrap(), U256::from(5u64) * pow10(17));
        assert_eq!(ether_to_wei("0.000000000000000001").unwrap(), U256::from(1u64));
    }

    #[test]
    fn sub_wei_precision_rounds() {
        assert_eq!(ether_to_wei("0.0000000000000000015").unwrap(), U256::from(2u64));
        assert_eq!(ether_to_wei("0.0000000000000000025").unwrap(), U256::from(2u64));
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(ether_to_wei("1e-3").unwrap(), pow10(15));
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(matches!(
            ether_to_wei("-1"),
            Err(Error::InvalidAmount { .. })
        ));
        assert!(matches!(
            ether_to_wei("one"),
            Err(Error::InvalidAmount { .. })
        ));
    }
}
