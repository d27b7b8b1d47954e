//! Budget utilization status
//!
//! Joins budget limits against aggregated expenses. The join is best-effort:
//! categories budgeted but never spent show zero spent, and expense
//! categories without a budget simply do not appear. Rows come out in the
//! budget book's insertion order.

use crate::engine::aggregate::{group_sum, percent_of};
use crate::models::{BudgetBook, ExpenseRecord, Money};

/// Utilization of one budgeted category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatusRow {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// May be negative when the category is overspent
    pub remaining: Money,
    /// 0.0 whenever the limit is non-positive, regardless of spend
    pub percent_used: f64,
}

impl BudgetStatusRow {
    /// Check whether spending has exceeded the limit
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Compute one status row per budgeted category
pub fn compute_budget_status(expenses: &[ExpenseRecord], budgets: &BudgetBook) -> Vec<BudgetStatusRow> {
    let spent_by_category = group_sum(expenses, |e| e.category.as_str(), |e| e.amount);

    budgets
        .entries()
        .iter()
        .map(|entry| {
            let spent = spent_by_category
                .iter()
                .find(|(category, _)| *category == entry.category)
                .map(|(_, sum)| *sum)
                .unwrap_or_else(Money::zero);

            let remaining = entry.limit - spent;
            let percent_used = if entry.limit.is_positive() {
                percent_of(spent, entry.limit)
            } else {
                0.0
            };

            BudgetStatusRow {
                category: entry.category.clone(),
                limit: entry.limit,
                spent,
                remaining,
                percent_used,
            }
        })
        .collect()
}
