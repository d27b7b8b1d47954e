//! Budget limits per expense category
//!
//! Budgets are an ordered mapping from category name to a spending limit.
//! Setting a limit for an existing category replaces the old limit in place,
//! keeping the category's position so budget-status reports stay in a
//! deterministic order. There is no limit history.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Validation errors for budget limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
}

impl std::fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

impl BudgetValidationError {
    /// The name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyCategory => "category",
        }
    }
}

/// A single category limit
///
/// A limit of zero or below means "no budget" for percentage purposes; the
/// category still appears in status rows with a 0% utilization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLimit {
    pub category: String,
    pub limit: Money,
}

/// Ordered category -> limit mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetBook {
    entries: Vec<BudgetLimit>,
}

impl BudgetBook {
    /// Create an empty budget book
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for a category
    ///
    /// Replaces an existing entry in place or appends a new one. Returns an
    /// error for an empty category name.
    pub fn set(
        &mut self,
        category: impl Into<String>,
        limit: Money,
    ) -> Result<(), BudgetValidationError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.category == category) {
            entry.limit = limit;
        } else {
            self.entries.push(BudgetLimit { category, limit });
        }
        Ok(())
    }

    /// Look up the limit for a category
    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.limit)
    }

    /// Remove the limit for a category, returning it if present
    pub fn remove(&mut self, category: &str) -> Option<BudgetLimit> {
        let pos = self.entries.iter().position(|e| e.category == category)?;
        Some(self.entries.remove(pos))
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[BudgetLimit] {
        &self.entries
    }

    /// Number of budgeted categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no budgets are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
