use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amounts. Always `Decimal`, never `f64`.
pub type Money = Decimal;

/// Rates expressed as fractions (0.01 = 1%), never as percentages.
pub type Rate = Decimal;

/// The amortization system used to build a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AmortizationType {
    /// French system: constant installment, growing amortization.
    #[default]
    Price,
    /// Sistema de Amortização Constante: constant amortization, shrinking installment.
    Sac,
}

/// Input parameters for a loan schedule calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanCalculationInput {
    /// The borrowed amount.
    pub principal: Money,
    /// The periodic (monthly) interest rate as a fraction.
    pub rate_monthly: Rate,
    /// The number of installments.
    pub months: u32,
    /// Due date of the first installment.
    pub first_due_date: NaiveDate,
    /// The amortization system, Price unless stated otherwise.
    #[serde(default)]
    pub amortization_type: AmortizationType,
}

impl LoanCalculationInput {
    /// Builds a Price-system input.
    pub fn new(principal: Money, rate_monthly: Rate, months: u32, first_due_date: NaiveDate) -> Self {
        Self {
            principal,
            rate_monthly,
            months,
            first_due_date,
            amortization_type: AmortizationType::Price,
        }
    }

    /// Switches the amortization system.
    pub fn with_amortization_type(mut self, amortization_type: AmortizationType) -> Self {
        self.amortization_type = amortization_type;
        self
    }
}

/// One row of a payment schedule. Money values are rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based position in the schedule.
    pub index: u32,
    pub due_date: NaiveDate,
    /// Total amount due this period (interest + amortization).
    pub installment: Money,
    /// Interest charged on the balance outstanding before this payment.
    pub interest: Money,
    /// The portion of the payment that reduces the principal.
    pub amortization: Money,
    /// Outstanding balance after this payment.
    pub remaining: Money,
}

/// A full payment schedule and its aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanCalculationResult {
    pub schedule: Vec<Installment>,
    /// Nominal installment for Price; the first (largest) installment for SAC.
    pub monthly_installment: Money,
    /// Sum of every row's `installment`.
    pub total_with_interest: Money,
    /// Sum of every row's `interest`.
    pub total_interest: Money,
}

impl LoanCalculationResult {
    /// The first row, which carries the most interest.
    pub fn first_installment(&self) -> Option<&Installment> {
        self.schedule.first()
    }

    /// The row that retires the balance.
    pub fn last_installment(&self) -> Option<&Installment> {
        self.schedule.last()
    }

    /// Sum of every row's `amortization`.
    pub fn total_amortization(&self) -> Money {
        self.schedule.iter().map(|row| row.amortization).sum()
    }
}
