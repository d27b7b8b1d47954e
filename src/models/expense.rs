//! Expense record model
//!
//! A single dated expense entry. The category is free text and doubles as
//! the grouping key for budgets and breakdown reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

impl ExpenseValidationError {
    /// The name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::NegativeAmount => "amount",
        }
    }
}

/// A dated expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub amount: Money,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    /// Validate the record invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        Ok(())
    }
}
