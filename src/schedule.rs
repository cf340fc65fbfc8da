use log::debug;
use rust_decimal::{Decimal, MathematicalOps};

use crate::calendar::due_date;
use crate::error::LoanError;
use crate::rates::{checked, round_money};
use crate::types::{AmortizationType, Installment, LoanCalculationInput, LoanCalculationResult, Money, Rate};
use crate::LoanResult;

/// Calculates the full payment schedule of a loan.
///
/// Interest is charged on the balance outstanding before each payment. Every
/// money value placed in a row is rounded to cents (half away from zero) and
/// the totals are the sums of those rounded rows, so they match what a reader
/// adds up by hand.
///
/// Price rows chain exactly: the balance is reduced by each row's rounded
/// amortization and the amortizations add up to the principal. SAC keeps the
/// balance at full precision so every row shows the same amortization; its
/// rows may drift from the principal by up to half a cent each.
///
/// The last installment always retires whatever balance is left, so the final
/// `remaining` is exactly zero.
///
/// # Arguments
///
/// * `input` - Principal, monthly rate, term, first due date and amortization system.
///
/// # Errors
///
/// Returns an error if the input fails [`validate_input`], an intermediate
/// value overflows `Decimal`, or a due date falls outside the supported calendar.
pub fn calculate_loan_schedule(input: &LoanCalculationInput) -> LoanResult<LoanCalculationResult> {
    validate_input(input)?;

    let result = match input.amortization_type {
        AmortizationType::Price => calculate_price_schedule(input)?,
        AmortizationType::Sac => calculate_sac_schedule(input)?,
    };

    debug!(
        "{:?} schedule: principal={} rate={} months={} installment={} total={} interest={}",
        input.amortization_type,
        input.principal,
        input.rate_monthly,
        input.months,
        result.monthly_installment,
        result.total_with_interest,
        result.total_interest,
    );

    Ok(result)
}

/// Checks the preconditions of [`calculate_loan_schedule`].
///
/// The principal must be worth at least one cent, the term at least one
/// month and the rate not negative. A SAC loan must also amortize at least
/// one cent per month.
pub fn validate_input(input: &LoanCalculationInput) -> LoanResult<()> {
    if round_money(input.principal) <= Decimal::ZERO {
        return Err(LoanError::InvalidPrincipal { principal: input.principal });
    }
    if input.months == 0 {
        return Err(LoanError::InvalidTerm { months: input.months });
    }
    if input.rate_monthly < Decimal::ZERO {
        return Err(LoanError::InvalidRate { rate: input.rate_monthly });
    }
    if input.amortization_type == AmortizationType::Sac
        && round_money(input.principal / Decimal::from(input.months)).is_zero()
    {
        return Err(LoanError::PrincipalTooSmall {
            principal: input.principal,
            months: input.months,
        });
    }
    Ok(())
}

/// Fixed installment of the Price (French) system.
///
/// PMT = P * [i(1 + i)^n] / [(1 + i)^n – 1], evaluated as P * i / [1 - (1 + i)^-n]
/// so long terms shrink towards zero instead of overflowing. A zero rate has
/// no annuity factor and degenerates to equal slices of the principal.
///
/// # Errors
///
/// Returns `Overflow` when the payment does not fit in a `Decimal`.
pub fn price_fixed_payment(principal: Money, rate_monthly: Rate, months: u32) -> LoanResult<Money> {
    let term = Decimal::from(months);
    if rate_monthly.is_zero() {
        return Ok(principal / term);
    }

    let growth = checked(Decimal::ONE.checked_add(rate_monthly), "rate factor")?;
    let discount = checked((Decimal::ONE / growth).checked_powu(u64::from(months)), "discount factor")?;
    let annuity_denominator = Decimal::ONE - discount;
    if annuity_denominator.is_zero() {
        // Rate too small to register at Decimal precision.
        return Ok(principal / term);
    }

    let first_interest = checked(principal.checked_mul(rate_monthly), "Price installment")?;
    checked(first_interest.checked_div(annuity_denominator), "Price installment")
}

fn calculate_price_schedule(input: &LoanCalculationInput) -> LoanResult<LoanCalculationResult> {
    let principal = round_money(input.principal);
    let rounded_payment = round_money(price_fixed_payment(principal, input.rate_monthly, input.months)?);
    if input.rate_monthly.is_zero() {
        debug!("zero-rate Price loan, installments are equal slices of the principal");
    }

    let mut current_balance = principal;
    let mut schedule = Vec::with_capacity(input.months as usize);

    for index in 1..=input.months {
        let interest = round_money(interest_on(current_balance, input.rate_monthly)?);
        let row = if index == input.months {
            final_row(input, index, interest, current_balance)?
        } else {
            let amortization = (rounded_payment - interest).min(current_balance).max(Decimal::ZERO);
            current_balance -= amortization;

            Installment {
                index,
                due_date: due_date(input.first_due_date, index)?,
                installment: interest + amortization,
                interest,
                amortization,
                remaining: current_balance,
            }
        };
        schedule.push(row);
    }

    summarize(schedule, rounded_payment)
}

fn calculate_sac_schedule(input: &LoanCalculationInput) -> LoanResult<LoanCalculationResult> {
    let fixed_amortization = input.principal / Decimal::from(input.months);
    let rounded_amortization = round_money(fixed_amortization);

    let mut current_balance = input.principal;
    let mut schedule = Vec::with_capacity(input.months as usize);

    for index in 1..=input.months {
        let interest = round_money(interest_on(current_balance, input.rate_monthly)?);
        let row = if index == input.months {
            final_row(input, index, interest, current_balance)?
        } else {
            current_balance = (current_balance - fixed_amortization).max(Decimal::ZERO);

            Installment {
                index,
                due_date: due_date(input.first_due_date, index)?,
                installment: checked(interest.checked_add(rounded_amortization), "SAC installment")?,
                interest,
                amortization: rounded_amortization,
                remaining: round_money(current_balance),
            }
        };
        schedule.push(row);
    }

    let first_payment = schedule.first().map(|row| row.installment).unwrap_or_default();
    summarize(schedule, first_payment)
}

fn interest_on(balance: Money, rate_monthly: Rate) -> LoanResult<Money> {
    checked(balance.checked_mul(rate_monthly), "interest")
}

/// The last installment amortizes the whole outstanding balance.
fn final_row(
    input: &LoanCalculationInput,
    index: u32,
    interest: Money,
    current_balance: Money,
) -> LoanResult<Installment> {
    let amortization = round_money(current_balance);

    Ok(Installment {
        index,
        due_date: due_date(input.first_due_date, index)?,
        installment: checked(interest.checked_add(amortization), "final installment")?,
        interest,
        amortization,
        remaining: Decimal::ZERO,
    })
}

fn summarize(schedule: Vec<Installment>, monthly_installment: Money) -> LoanResult<LoanCalculationResult> {
    let total_with_interest = checked_sum(schedule.iter().map(|row| row.installment), "total with interest")?;
    let total_interest = checked_sum(schedule.iter().map(|row| row.interest), "total interest")?;

    Ok(LoanCalculationResult {
        schedule,
        monthly_installment,
        total_with_interest,
        total_interest,
    })
}

fn checked_sum(mut values: impl Iterator<Item = Money>, context: &str) -> LoanResult<Money> {
    values.try_fold(Decimal::ZERO, |total, value| checked(total.checked_add(value), context))
}
