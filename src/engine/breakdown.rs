//! Category and investment breakdowns
//!
//! Per-category expense shares and per-kind investment performance. Both
//! breakdowns sort rows by amount descending with a stable sort, so rows of
//! equal size keep first-seen order.

use crate::engine::aggregate::{group_sum, percent_of};
use crate::models::{AssetClassPolicy, ExpenseRecord, InvestmentRecord, Money};

/// One expense category's share of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub amount: Money,
    pub percentage: f64,
}

/// One investment kind's aggregate performance
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentKindRow {
    pub kind: String,
    pub amount: Money,
    /// Share of total invested capital
    pub percentage: f64,
    pub actual_return: Money,
    /// Realized return rate for this kind, 0.0 when nothing is invested
    pub return_rate: f64,
    /// Policy expectation, 0.0 for kinds outside the policy table
    pub expected_annual_rate: f64,
}

/// Per-kind rows plus portfolio-wide rates
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentBreakdown {
    pub rows: Vec<InvestmentKindRow>,
    pub total_invested: Money,
    pub total_actual_return: Money,
    /// Realized return across the whole portfolio
    pub overall_return_rate: f64,
    /// Policy-weighted expected rate; kinds without a policy entry dilute it
    pub expected_return_rate: f64,
}

/// Expense totals per category, largest first
pub fn compute_category_breakdown(expenses: &[ExpenseRecord]) -> Vec<CategoryRow> {
    let sums = group_sum(expenses, |e| e.category.as_str(), |e| e.amount);
    let total: Money = sums.iter().map(|(_, amount)| *amount).sum();

    let mut rows: Vec<CategoryRow> = sums
        .into_iter()
        .map(|(category, amount)| CategoryRow {
            category,
            amount,
            percentage: percent_of(amount, total),
        })
        .collect();

    rows.sort_by(|a, b| b.amount.cmp(&a.amount));
    rows
}

/// Investment performance per kind plus overall rates
pub fn compute_investment_breakdown(
    investments: &[InvestmentRecord],
    policy: &[AssetClassPolicy],
) -> InvestmentBreakdown {
    // Parallel sums over the same key set
    let amounts = group_sum(investments, |i| i.kind.as_str(), |i| i.amount);
    let returns = group_sum(investments, |i| i.kind.as_str(), |i| i.actual_return);

    let total_invested: Money = amounts.iter().map(|(_, amount)| *amount).sum();
    let total_actual_return: Money = returns.iter().map(|(_, ret)| *ret).sum();

    let mut rows: Vec<InvestmentKindRow> = amounts
        .into_iter()
        .zip(returns)
        .map(|((kind, amount), (_, actual_return))| InvestmentKindRow {
            percentage: percent_of(amount, total_invested),
            return_rate: percent_of(actual_return, amount),
            expected_annual_rate: AssetClassPolicy::expected_rate_for(policy, &kind),
            kind,
            amount,
            actual_return,
        })
        .collect();

    // Expected contribution only from kinds the policy knows; unknown kinds
    // still sit in the denominator and dilute the blended rate.
    let expected_contribution: f64 = rows
        .iter()
        .map(|row| row.amount.cents() as f64 * row.expected_annual_rate / 100.0)
        .sum();
    let expected_return_rate = if total_invested.is_zero() {
        0.0
    } else {
        expected_contribution / total_invested.cents() as f64 * 100.0
    };

    rows.sort_by(|a, b| b.amount.cmp(&a.amount));

    InvestmentBreakdown {
        overall_return_rate: percent_of(total_actual_return, total_invested),
        expected_return_rate,
        rows,
        total_invested,
        total_actual_return,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn expense(amount: i64, category: &str) -> ExpenseRecord {
        ExpenseRecord::new(Money::from_cents(amount), category, "", date())
    }

    fn investment(amount: i64, actual_return: i64, kind: &str) -> InvestmentRecord {
        InvestmentRecord::new(
            "",
            Money::from_cents(amount),
            Money::from_cents(actual_return),
            kind,
            date(),
        )
    }

    #[test]
    fn test_category_breakdown_empty() {
        assert!(compute_category_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_category_breakdown_percentages() {
        let expenses = vec![
            expense(3000, "food"),
            expense(1000, "fun"),
            expense(1000, "food"),
        ];
        let rows = compute_category_breakdown(&expenses);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "food");
        assert_eq!(rows[0].amount.cents(), 4000);
        assert!((rows[0].percentage - 80.0).abs() < 1e-9);
        assert!((rows[1].percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_breakdown_stable_on_ties() {
        let expenses = vec![
            expense(1000, "alpha"),
            expense(1000, "beta"),
            expense(2000, "gamma"),
        ];
        let rows = compute_category_breakdown(&expenses);

        assert_eq!(rows[0].category, "gamma");
        // Equal amounts keep first-seen order
        assert_eq!(rows[1].category, "alpha");
        assert_eq!(rows[2].category, "beta");
    }

    #[test]
    fn test_investment_breakdown_empty() {
        let breakdown = compute_investment_breakdown(&[], &AssetClassPolicy::standard());

        assert!(breakdown.rows.is_empty());
        assert_eq!(breakdown.total_invested, Money::zero());
        assert_eq!(breakdown.overall_return_rate, 0.0);
        assert_eq!(breakdown.expected_return_rate, 0.0);
    }

    #[test]
    fn test_investment_breakdown_single_kind() {
        let investments = vec![investment(100_000, 12_000, "stocks")];
        let breakdown = compute_investment_breakdown(&investments, &AssetClassPolicy::standard());

        assert_eq!(breakdown.rows.len(), 1);
        let row = &breakdown.rows[0];
        assert!((row.return_rate - 12.0).abs() < 1e-9);
        assert_eq!(row.expected_annual_rate, 12.0);
        assert!((row.percentage - 100.0).abs() < 1e-9);

        assert!((breakdown.overall_return_rate - 12.0).abs() < 1e-9);
        assert!((breakdown.expected_return_rate - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_kind_dilutes_expected_rate() {
        // $1000 in stocks (12% expected) + $1000 in crypto (no policy entry):
        // blended expectation is 6%, not 12%.
        let investments = vec![
            investment(100_000, 0, "stocks"),
            investment(100_000, 0, "crypto"),
        ];
        let breakdown = compute_investment_breakdown(&investments, &AssetClassPolicy::standard());

        let crypto = breakdown.rows.iter().find(|r| r.kind == "crypto").unwrap();
        assert_eq!(crypto.expected_annual_rate, 0.0);
        assert_eq!(breakdown.total_invested.cents(), 200_000);
        assert!((breakdown.expected_return_rate - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_rows_sorted_by_amount_descending() {
        let investments = vec![
            investment(10_000, 0, "bond fund"),
            investment(50_000, 0, "stocks"),
            investment(30_000, 0, "time deposit"),
        ];
        let breakdown = compute_investment_breakdown(&investments, &AssetClassPolicy::standard());

        let kinds: Vec<&str> = breakdown.rows.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, ["stocks", "time deposit", "bond fund"]);
    }

    #[test]
    fn test_zero_amount_kind_tracked_with_zero_rate() {
        let investments = vec![investment(0, 500, "stocks")];
        let breakdown = compute_investment_breakdown(&investments, &AssetClassPolicy::standard());

        assert_eq!(breakdown.rows[0].return_rate, 0.0);
        assert_eq!(breakdown.rows[0].actual_return.cents(), 500);
    }
}
