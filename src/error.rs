use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building a loan schedule or a loan input.
#[derive(Debug, Error, PartialEq)]
pub enum LoanError {
    /// The principal is not at least one cent.
    #[error("Invalid principal: {principal} (must be at least one cent)")]
    InvalidPrincipal { principal: Decimal },

    /// The term has no installments.
    #[error("Invalid term: {months} months (at least one installment is required)")]
    InvalidTerm { months: u32 },

    /// The rate is negative.
    #[error("Invalid rate: {rate} (must not be negative)")]
    InvalidRate { rate: Decimal },

    /// A SAC amortization would round to zero cents.
    #[error("Principal {principal} is too small to amortize over {months} months")]
    PrincipalTooSmall { principal: Decimal, months: u32 },

    /// An intermediate value does not fit in a `Decimal`.
    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },

    /// A due date falls outside the supported calendar.
    #[error("Due date out of range: {date} plus {months} months")]
    DateOutOfRange { date: NaiveDate, months: u32 },

    /// No product with this id exists in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// The product does not offer the requested number of installments.
    #[error("Term of {months} months is outside {product}'s range ({min}..={max})")]
    TermOutOfRange {
        product: String,
        months: u32,
        min: u32,
        max: u32,
    },
}
