//! Investment record model
//!
//! A single investment entry: what was bought, how much went in, what it has
//! actually returned so far, and which asset class it belongs to. The asset
//! class is free text; kinds outside the standard policy table still
//! aggregate but carry no modeled expectation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Validation errors for investment records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvestmentValidationError {
    NegativeAmount,
}

impl std::fmt::Display for InvestmentValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Invested amount cannot be negative"),
        }
    }
}

impl std::error::Error for InvestmentValidationError {}

impl InvestmentValidationError {
    /// The name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::NegativeAmount => "amount",
        }
    }
}

/// A dated investment entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRecord {
    #[serde(default)]
    pub name: String,
    pub amount: Money,
    /// Realized return to date; absent in older data files, defaults to 0
    #[serde(default)]
    pub actual_return: Money,
    pub kind: String,
    pub date: NaiveDate,
}

impl InvestmentRecord {
    /// Create a new investment record
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        actual_return: Money,
        kind: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            actual_return,
            kind: kind.into(),
            date,
        }
    }

    /// Validate the record invariants
    pub fn validate(&self) -> Result<(), InvestmentValidationError> {
        if self.amount.is_negative() {
            return Err(InvestmentValidationError::NegativeAmount);
        }
        Ok(())
    }

    /// Realized return as a percentage of the invested amount
    ///
    /// Zero-amount investments report a 0% rate rather than dividing by zero.
    pub fn return_rate(&self) -> f64 {
        if self.amount.is_zero() {
            0.0
        } else {
            self.actual_return.cents() as f64 / self.amount.cents() as f64 * 100.0
        }
    }
}
