//! Financial summary
//!
//! Top-line totals plus the five most recent income and expense entries for
//! the textual report.

use crate::engine::aggregate::{most_recent, percent_of, total_of};
use crate::models::{ExpenseRecord, IncomeRecord, Money};

/// Number of recent entries shown in the summary
const RECENT_ENTRIES: usize = 5;

/// Top-line financial summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    /// Balance as a percentage of income; 0.0 unless both are positive
    pub savings_rate: f64,
    pub recent_income: Vec<IncomeRecord>,
    pub recent_expenses: Vec<ExpenseRecord>,
}

/// Build the summary over an income/expense snapshot
pub fn build_summary(income: &[IncomeRecord], expenses: &[ExpenseRecord]) -> SummaryReport {
    let total_income = total_of(income, |r| r.amount);
    let total_expenses = total_of(expenses, |r| r.amount);
    let balance = total_income - total_expenses;

    let savings_rate = if total_income.is_positive() && balance.is_positive() {
        percent_of(balance, total_income)
    } else {
        0.0
    };

    SummaryReport {
        total_income,
        total_expenses,
        balance,
        savings_rate,
        recent_income: most_recent(income, |r| r.date, RECENT_ENTRIES),
        recent_expenses: most_recent(expenses, |r| r.date, RECENT_ENTRIES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn income(cents: i64, d: &str) -> IncomeRecord {
        IncomeRecord::new(Money::from_cents(cents), "job", date(d))
    }

    fn expense(cents: i64, d: &str) -> ExpenseRecord {
        ExpenseRecord::new(Money::from_cents(cents), "food", "desc", date(d))
    }

    #[test]
    fn test_basic_summary() {
        let income = vec![income(10_000, "2024-01-01")];
        let expenses = vec![expense(4_000, "2024-01-02")];

        let summary = build_summary(&income, &expenses);

        assert_eq!(summary.total_income.cents(), 10_000);
        assert_eq!(summary.total_expenses.cents(), 4_000);
        assert_eq!(summary.balance.cents(), 6_000);
        assert!((summary.savings_rate - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_savings_rate_zero_when_balance_negative() {
        let income = vec![income(10_000, "2024-01-01")];
        let expenses = vec![expense(15_000, "2024-01-02")];

        let summary = build_summary(&income, &expenses);

        assert!(summary.balance.is_negative());
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn test_savings_rate_zero_when_balance_zero() {
        let income = vec![income(10_000, "2024-01-01")];
        let expenses = vec![expense(10_000, "2024-01-02")];

        let summary = build_summary(&income, &expenses);
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn test_savings_rate_zero_when_no_income() {
        let summary = build_summary(&[], &[]);
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn test_recent_entries_capped_at_five() {
        let income: Vec<IncomeRecord> = (1..=8)
            .map(|day| income(100, &format!("2024-01-{:02}", day)))
            .collect();

        let summary = build_summary(&income, &[]);

        assert_eq!(summary.recent_income.len(), 5);
        assert_eq!(summary.recent_income[0].date, date("2024-01-08"));
        assert_eq!(summary.recent_income[4].date, date("2024-01-04"));
    }
}
