//! Income record model
//!
//! A single dated income entry: how much came in, from where, and when.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeAmount,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Income amount cannot be negative"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

impl IncomeValidationError {
    /// The name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::NegativeAmount => "amount",
        }
    }
}

/// A dated income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub amount: Money,
    #[serde(default)]
    pub source: String,
    pub date: NaiveDate,
}

impl IncomeRecord {
    /// Create a new income record
    pub fn new(amount: Money, source: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            source: source.into(),
            date,
        }
    }

    /// Validate the record invariants
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        Ok(())
    }
}
