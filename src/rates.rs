//! Interest-rate conversions and cent rounding.
//!
//! Conversions use compound-interest equivalence: a monthly rate `i` and a
//! yearly rate `j` are equivalent when `(1 + i)^12 == 1 + j`.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::LoanError;
use crate::types::{Money, Rate};
use crate::LoanResult;

const MONTHS_PER_YEAR: u64 = 12;

/// Converts a yearly rate to its compound-equivalent monthly rate.
///
/// `(1 + yearly_rate)^(1/12) - 1`. Both rates are fractions (0.12 = 12%).
///
/// # Errors
///
/// Returns `InvalidRate` for a negative rate and `Overflow` when the rate is
/// too large for `Decimal`.
pub fn convert_yearly_to_monthly_rate(yearly_rate: Rate) -> LoanResult<Rate> {
    if yearly_rate < Decimal::ZERO {
        return Err(LoanError::InvalidRate { rate: yearly_rate });
    }
    if yearly_rate.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let exponent = Decimal::ONE / Decimal::from(MONTHS_PER_YEAR);
    let base = checked(Decimal::ONE.checked_add(yearly_rate), "yearly rate factor")?;
    let monthly_factor = checked(base.checked_powd(exponent), "yearly to monthly conversion")?;
    Ok(monthly_factor - Decimal::ONE)
}

/// Converts a monthly rate to its compound-equivalent yearly rate.
///
/// `(1 + monthly_rate)^12 - 1`, the inverse of [`convert_yearly_to_monthly_rate`].
///
/// # Errors
///
/// Returns `InvalidRate` for a negative rate and `Overflow` when twelve
/// compounded months no longer fit in a `Decimal`.
pub fn convert_monthly_to_yearly_rate(monthly_rate: Rate) -> LoanResult<Rate> {
    if monthly_rate < Decimal::ZERO {
        return Err(LoanError::InvalidRate { rate: monthly_rate });
    }

    let base = checked(Decimal::ONE.checked_add(monthly_rate), "monthly rate factor")?;
    let yearly_factor = checked(base.checked_powu(MONTHS_PER_YEAR), "monthly to yearly conversion")?;
    Ok(yearly_factor - Decimal::ONE)
}

/// Turns a failed checked operation into `LoanError::Overflow`.
pub(crate) fn checked(value: Option<Decimal>, context: &str) -> LoanResult<Decimal> {
    value.ok_or_else(|| LoanError::Overflow { context: context.to_string() })
}

/// 10.5 -> 0.105
pub fn percent_to_rate(percent: Decimal) -> Rate {
    percent / dec!(100)
}

/// 0.105 -> 10.5
pub fn rate_to_percent(rate: Rate) -> Decimal {
    rate * dec!(100)
}

/// Rounds a money value to cents, half away from zero.
pub fn round_money(value: Money) -> Money {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
