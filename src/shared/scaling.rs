//! Pure conversion module for price/shares to raw base-unit amounts.
//!
//! All math uses `rust_decimal::Decimal` for exact integer arithmetic.
//! No async, no network calls.

use std::fmt;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::shared::Side;

/// Decimals of both the collateral (USDC) and the outcome shares on the CLOB.
pub const BASE_UNIT_DECIMALS: u32 = 6;

/// Result of converting price + shares to raw u64 amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledAmounts {
    /// What the maker gives.
    pub maker_amount: u64,
    /// What the maker receives.
    pub taker_amount: u64,
}

/// Errors that can occur during price/shares scaling.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalingError {
    NonPositivePrice(String),
    NonPositiveShares(String),
    Overflow { context: String },
    ZeroAmount,
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::NonPositivePrice(v) => write!(f, "Price must be positive, got {}", v),
            ScalingError::NonPositiveShares(v) => {
                write!(f, "Shares must be positive, got {}", v)
            }
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
            ScalingError::ZeroAmount => write!(f, "Computed amount is zero"),
        }
    }
}

impl std::error::Error for ScalingError {}

/// Convert a price and share count into raw u64 maker/taker amounts.
///
/// # Conversion math
///
/// ```text
/// share_units = floor(shares         * 10^6)
/// usdc_units  = floor(price * shares * 10^6)
/// ```
///
/// Both amounts truncate toward zero so a draft never commits more than the
/// estimate covers. Then assign based on side:
///
/// | Side | maker_amount (gives) | taker_amount (receives) |
/// |------|----------------------|-------------------------|
/// | BUY  | usdc_units           | share_units             |
/// | SELL | share_units          | usdc_units              |
pub fn scale_fill(price: Decimal, shares: Decimal, side: Side) -> Result<ScaledAmounts, ScalingError> {
    if price <= Decimal::ZERO {
        return Err(ScalingError::NonPositivePrice(price.to_string()));
    }
    if shares <= Decimal::ZERO {
        return Err(ScalingError::NonPositiveShares(shares.to_string()));
    }

    let multiplier = Decimal::from(10u64.pow(BASE_UNIT_DECIMALS));

    let share_units = shares
        .checked_mul(multiplier)
        .ok_or_else(|| ScalingError::Overflow {
            context: "shares * 10^6".to_string(),
        })?
        .trunc();

    let usdc_units = price
        .checked_mul(shares)
        .ok_or_else(|| ScalingError::Overflow {
            context: "price * shares".to_string(),
        })?
        .checked_mul(multiplier)
        .ok_or_else(|| ScalingError::Overflow {
            context: "price * shares * 10^6".to_string(),
        })?
        .trunc();

    let share_u64 = share_units.to_u64().ok_or_else(|| ScalingError::Overflow {
        context: format!("share units {} do not fit in u64", share_units),
    })?;
    let usdc_u64 = usdc_units.to_u64().ok_or_else(|| ScalingError::Overflow {
        context: format!("usdc units {} do not fit in u64", usdc_units),
    })?;

    if share_u64 == 0 || usdc_u64 == 0 {
        return Err(ScalingError::ZeroAmount);
    }

    let (maker_amount, taker_amount) = match side {
        Side::Buy => (usdc_u64, share_u64),
        Side::Sell => (share_u64, usdc_u64),
    };

    Ok(ScaledAmounts {
        maker_amount,
        taker_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_buy_basic() {
        // BUY 100 @ 0.65: gives 65 USDC, receives 100 shares
        let result = scale_fill(dec("0.65"), dec("100"), Side::Buy).unwrap();
        assert_eq!(result.maker_amount, 65_000_000);
        assert_eq!(result.taker_amount, 100_000_000);
    }

    #[test]
    fn test_sell_basic() {
        // SELL 3 @ 0.60: gives 3 shares, receives 1.80 USDC
        let result = scale_fill(dec("0.60"), dec("3"), Side::Sell).unwrap();
        assert_eq!(result.maker_amount, 3_000_000);
        assert_eq!(result.taker_amount, 1_800_000);
    }

    #[test]
    fn test_sub_unit_remainders_truncate() {
        let result = scale_fill(dec("0.33"), dec("1.0000005"), Side::Buy).unwrap();
        assert_eq!(result.taker_amount, 1_000_000);
        // 0.33 * 1.0000005 * 10^6 = 330000.165
        assert_eq!(result.maker_amount, 330_000);
    }

    #[test]
    fn test_non_positive_inputs() {
        assert!(matches!(
            scale_fill(Decimal::ZERO, dec("1"), Side::Buy),
            Err(ScalingError::NonPositivePrice(_))
        ));
        assert!(matches!(
            scale_fill(dec("0.5"), dec("-1"), Side::Sell),
            Err(ScalingError::NonPositiveShares(_))
        ));
    }

    #[test]
    fn test_dust_is_zero_amount() {
        assert_eq!(
            scale_fill(dec("0.01"), dec("0.00001"), Side::Buy),
            Err(ScalingError::ZeroAmount)
        );
    }

    #[test]
    fn test_overflow() {
        let result = scale_fill(dec("0.5"), Decimal::MAX, Side::Sell);
        assert!(matches!(result, Err(ScalingError::Overflow { .. })));
    }
}
