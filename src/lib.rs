//! `br_loan_schedule` builds loan payment schedules for the two amortization
//! systems used in Brazilian consumer and real estate credit:
//! - **Price (Sistema Francês de Amortização)**: fixed total installment; the
//!   interest portion shrinks while the amortization portion grows.
//! - **SAC (Sistema de Amortização Constante)**: fixed amortization; interest
//!   and total installment shrink over time.
//!
//! Every row is rounded to cents (half away from zero), the totals are sums of
//! the rounded rows, and the last installment always brings the balance to
//! exactly zero. Invalid or overflowing inputs are reported as [`LoanError`],
//! never as a panic or a partial schedule.
//!
//! ## Usage
//!
//! ```rust
//! use br_loan_schedule::{calculate_loan_schedule, AmortizationType, LoanCalculationInput};
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let input = LoanCalculationInput::new(
//!     dec!(10_000),
//!     dec!(0.01),
//!     12,
//!     NaiveDate::from_ymd_opt(2023, 2, 15).unwrap(),
//! )
//! .with_amortization_type(AmortizationType::Price);
//!
//! match calculate_loan_schedule(&input) {
//!     Ok(result) => {
//!         println!("Installment:    {}", result.monthly_installment);
//!         println!("Total paid:     {}", result.total_with_interest);
//!         println!("Total interest: {}", result.total_interest);
//!         for row in &result.schedule {
//!             println!("{:>3} {} {} {}", row.index, row.due_date, row.installment, row.remaining);
//!         }
//!     }
//!     Err(e) => eprintln!("Error calculating loan schedule: {}", e),
//! }
//! ```
//!
//! Annual rates are converted with compound equivalence:
//!
//! ```rust
//! use br_loan_schedule::{convert_monthly_to_yearly_rate, convert_yearly_to_monthly_rate};
//! use rust_decimal_macros::dec;
//!
//! let yearly = convert_monthly_to_yearly_rate(dec!(0.01)).unwrap();
//! assert_eq!(yearly.round_dp(4), dec!(0.1268));
//!
//! let monthly = convert_yearly_to_monthly_rate(yearly).unwrap();
//! assert!((monthly - dec!(0.01)).abs() < dec!(0.000001));
//! ```

pub mod calendar;
pub mod catalog;
pub mod comparison;
pub mod error;
pub mod rates;
pub mod schedule;
pub mod types;

pub use calendar::add_months_clamped;
pub use catalog::{LoanProduct, ProductCatalog};
pub use comparison::{SystemComparison, compare_amortization_systems};
pub use error::LoanError;
pub use rates::{convert_monthly_to_yearly_rate, convert_yearly_to_monthly_rate};
pub use schedule::calculate_loan_schedule;
pub use types::{AmortizationType, Installment, LoanCalculationInput, LoanCalculationResult, Money, Rate};

pub type LoanResult<T> = Result<T, LoanError>;
