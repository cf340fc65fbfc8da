use serde::{Deserialize, Serialize};

use crate::schedule::calculate_loan_schedule;
use crate::types::{AmortizationType, LoanCalculationInput, LoanCalculationResult, Money};
use crate::LoanResult;

/// Price and SAC schedules for the same loan, side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemComparison {
    pub price: LoanCalculationResult,
    pub sac: LoanCalculationResult,
    /// Total interest of Price minus total interest of SAC.
    pub interest_saved_with_sac: Money,
    /// First SAC installment minus the Price installment.
    pub first_installment_gap: Money,
}

/// Calculates the loan under both amortization systems.
///
/// `input.amortization_type` is ignored; both schedules are always produced.
///
/// # Errors
///
/// Same as [`calculate_loan_schedule`].
pub fn compare_amortization_systems(input: &LoanCalculationInput) -> LoanResult<SystemComparison> {
    let price = calculate_loan_schedule(&input.clone().with_amortization_type(AmortizationType::Price))?;
    let sac = calculate_loan_schedule(&input.clone().with_amortization_type(AmortizationType::Sac))?;

    Ok(SystemComparison {
        interest_saved_with_sac: price.total_interest - sac.total_interest,
        first_installment_gap: sac.monthly_installment - price.monthly_installment,
        price,
        sac,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compare_happy_path() {
        let input = LoanCalculationInput::new(
            dec!(12000),
            dec!(0.01),
            12,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        )
        .with_amortization_type(AmortizationType::Sac);

        let comparison = compare_amortization_systems(&input).unwrap();

        // SAC front-loads principal, so it pays less interest but starts higher.
        assert!(comparison.interest_saved_with_sac > Decimal::ZERO);
        assert!(comparison.first_installment_gap > Decimal::ZERO);
        assert_eq!(comparison.sac.schedule[0].installment, dec!(1120.00));
        assert_eq!(comparison.price.monthly_installment, dec!(1066.19));
    }

    #[test]
    fn test_compare_zero_rate_is_even() {
        let input = LoanCalculationInput::new(
            dec!(1200),
            Decimal::ZERO,
            12,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        );

        let comparison = compare_amortization_systems(&input).unwrap();

        assert_eq!(comparison.interest_saved_with_sac, Decimal::ZERO);
        assert_eq!(comparison.first_installment_gap, Decimal::ZERO);
    }

    #[test]
    fn test_compare_propagates_validation_errors() {
        let input = LoanCalculationInput::new(
            dec!(-1),
            dec!(0.01),
            12,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        );

        assert!(compare_amortization_systems(&input).is_err());
    }
}
