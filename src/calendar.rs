use chrono::{Months, NaiveDate};

use crate::error::LoanError;
use crate::LoanResult;

/// Adds `months` calendar months to `date`.
///
/// When the target month is shorter than `date`'s day of month, the result is
/// the last day of the target month (Jan 31 + 1 month = Feb 28/29), never a
/// day in the following month.
pub fn add_months_clamped(date: NaiveDate, months: u32) -> LoanResult<NaiveDate> {
    // chrono clamps to the end of the target month on its own.
    date.checked_add_months(Months::new(months))
        .ok_or(LoanError::DateOutOfRange { date, months })
}

/// Due date of the installment at 1-based `index`.
///
/// Always computed from the first due date so a clamped February does not
/// drag later installments off their original day. `index` starts at 1;
/// debug builds reject 0, release builds treat it as the first installment.
pub fn due_date(first_due_date: NaiveDate, index: u32) -> LoanResult<NaiveDate> {
    debug_assert!(index >= 1, "installment indices start at 1");
    add_months_clamped(first_due_date, index.saturating_sub(1))
}
