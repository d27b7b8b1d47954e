//! Allocation advisor
//!
//! Splits the capital still available for investing across the asset-class
//! policy table. Available capital is net worth minus what is already
//! invested; it is not clamped, so an over-invested ledger produces negative
//! suggestions that flag the over-commitment.

use crate::engine::aggregate::{net_worth, total_of};
use crate::models::{AssetClassPolicy, ExpenseRecord, IncomeRecord, InvestmentRecord, Money};

/// Suggested allocation for one asset class
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationRow {
    pub kind: String,
    pub ratio: f64,
    pub suggested_amount: Money,
    pub expected_annual_rate: f64,
    pub expected_return_amount: Money,
}

/// The full allocation suggestion
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationPlan {
    pub total_assets: Money,
    pub invested_assets: Money,
    pub available_assets: Money,
    /// One row per policy entry, in policy-table order
    pub rows: Vec<AllocationRow>,
}

/// Compute an allocation suggestion over currently available capital
pub fn compute_allocation_suggestion(
    income: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    investments: &[InvestmentRecord],
    policy: &[AssetClassPolicy],
) -> AllocationPlan {
    let total_assets = net_worth(income, expenses);
    let invested_assets = total_of(investments, |i| i.amount);
    let available_assets = total_assets - invested_assets;

    let rows = policy
        .iter()
        .map(|entry| {
            let suggested_amount = available_assets.mul_ratio(entry.ratio);
            AllocationRow {
                kind: entry.name.to_string(),
                ratio: entry.ratio,
                suggested_amount,
                expected_annual_rate: entry.expected_return,
                expected_return_amount: suggested_amount.apply_rate(entry.expected_return),
            }
        })
        .collect();

    AllocationPlan {
        total_assets,
        invested_assets,
        available_assets,
        rows,
    }
}
