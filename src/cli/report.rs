//! CLI commands for reports
//!
//! Pulls a snapshot from the store, runs the engine, and prints the
//! formatted views.

use clap::ValueEnum;

use crate::display::{
    format_budget_status, format_category_breakdown, format_investment_breakdown, format_summary,
};
use crate::engine::{
    build_summary, compute_budget_status, compute_category_breakdown,
    compute_investment_breakdown,
};
use crate::error::PlannerResult;
use crate::models::AssetClassPolicy;
use crate::storage::LedgerStore;

/// Which report view to print
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ReportView {
    /// Totals, savings rate, and recent entries
    Summary,
    /// Budget utilization per category
    Budget,
    /// Expense breakdown by category
    Categories,
    /// Investment performance by kind
    Investments,
    /// All of the above
    Full,
}

/// Handle the report command
pub fn handle_report_command(store: &LedgerStore, view: ReportView) -> PlannerResult<()> {
    let ledger = store.ledger();

    match view {
        ReportView::Summary => {
            println!("{}", format_summary(&build_summary(&ledger.income, &ledger.expenses)));
        }
        ReportView::Budget => {
            let rows = compute_budget_status(&ledger.expenses, &ledger.budgets);
            println!("{}", format_budget_status(&rows));
        }
        ReportView::Categories => {
            let rows = compute_category_breakdown(&ledger.expenses);
            println!("{}", format_category_breakdown(&rows));
        }
        ReportView::Investments => {
            let breakdown =
                compute_investment_breakdown(&ledger.investments, &AssetClassPolicy::standard());
            println!("{}", format_investment_breakdown(&breakdown));
        }
        ReportView::Full => {
            println!("{}", format_summary(&build_summary(&ledger.income, &ledger.expenses)));
            println!("Budget status:");
            let rows = compute_budget_status(&ledger.expenses, &ledger.budgets);
            println!("{}", format_budget_status(&rows));
            println!("Expenses by category:");
            let rows = compute_category_breakdown(&ledger.expenses);
            println!("{}", format_category_breakdown(&rows));
            println!("Investment analysis:");
            let breakdown =
                compute_investment_breakdown(&ledger.investments, &AssetClassPolicy::standard());
            println!("{}", format_investment_breakdown(&breakdown));
        }
    }

    Ok(())
}
