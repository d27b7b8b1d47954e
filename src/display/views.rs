//! Engine view formatting
//!
//! Turns the engine's view rows into terminal tables, mirroring the columns
//! of the report screens: budget status, category breakdown, investment
//! analysis, allocation suggestion, and the textual summary.

use crate::display::report::{double_separator, format_percentage, format_ratio, separator};
use crate::engine::{
    AllocationPlan, BudgetStatusRow, CategoryRow, InvestmentBreakdown, SummaryReport,
};

const REPORT_WIDTH: usize = 72;

/// Format the financial summary as a text block
pub fn format_summary(summary: &SummaryReport) -> String {
    let mut output = String::new();

    output.push_str("Financial Summary\n");
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!("Total income:   {}\n", summary.total_income));
    output.push_str(&format!("Total expenses: {}\n", summary.total_expenses));
    output.push_str(&format!("Balance:        {}\n", summary.balance));
    output.push_str(&format!(
        "Savings rate:   {:.2}%\n",
        summary.savings_rate
    ));

    output.push_str("\nRecent income:\n");
    if summary.recent_income.is_empty() {
        output.push_str("  (none)\n");
    }
    for record in &summary.recent_income {
        output.push_str(&format!(
            "  {} | {}: {}\n",
            record.date, record.source, record.amount
        ));
    }

    output.push_str("\nRecent expenses:\n");
    if summary.recent_expenses.is_empty() {
        output.push_str("  (none)\n");
    }
    for record in &summary.recent_expenses {
        output.push_str(&format!(
            "  {} | {} - {}: {}\n",
            record.date, record.category, record.description, record.amount
        ));
    }

    output
}

/// Format budget status rows as a table
pub fn format_budget_status(rows: &[BudgetStatusRow]) -> String {
    if rows.is_empty() {
        return "No budgets set. Use 'finplan budget set <category> <amount>'.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16} {:>12} {:>12} {:>12} {:>8}\n",
        "Category", "Budget", "Spent", "Remaining", "Used"
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for row in rows {
        let marker = if row.is_overspent() { " !" } else { "" };
        output.push_str(&format!(
            "{:<16} {:>12} {:>12} {:>12} {:>8}{}\n",
            row.category,
            row.limit.to_string(),
            row.spent.to_string(),
            row.remaining.to_string(),
            format_percentage(row.percent_used),
            marker
        ));
    }

    output
}

/// Format the expense category breakdown as a table
pub fn format_category_breakdown(rows: &[CategoryRow]) -> String {
    if rows.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:>12} {:>8}\n",
        "Category", "Amount", "Share"
    ));
    output.push_str(&separator(44));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<20} {:>12} {:>8}\n",
            row.category,
            row.amount.to_string(),
            format_percentage(row.percentage)
        ));
    }

    output
}

/// Format the investment breakdown as an overview line plus a table
pub fn format_investment_breakdown(breakdown: &InvestmentBreakdown) -> String {
    if breakdown.rows.is_empty() {
        return "No investments recorded.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Total invested: {} | Overall return: {:.2}% | Expected return: {:.2}%\n",
        breakdown.total_invested, breakdown.overall_return_rate, breakdown.expected_return_rate
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "{:<16} {:>12} {:>8} {:>12} {:>9} {:>10}\n",
        "Kind", "Amount", "Share", "Return", "Rate", "Expected"
    ));

    for row in &breakdown.rows {
        output.push_str(&format!(
            "{:<16} {:>12} {:>8} {:>12} {:>8.2}% {:>9.1}%\n",
            row.kind,
            row.amount.to_string(),
            format_percentage(row.percentage),
            row.actual_return.to_string(),
            row.return_rate,
            row.expected_annual_rate
        ));
    }

    output
}

/// Format the allocation suggestion as scalars plus a table
pub fn format_allocation_plan(plan: &AllocationPlan) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total assets: {} | Invested: {} | Available: {}\n",
        plan.total_assets, plan.invested_assets, plan.available_assets
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "{:<16} {:>8} {:>14} {:>10} {:>14}\n",
        "Asset class", "Ratio", "Suggested", "Rate", "Expected"
    ));

    for row in &plan.rows {
        output.push_str(&format!(
            "{:<16} {:>8} {:>14} {:>9.1}% {:>14}\n",
            row.kind,
            format_ratio(row.ratio),
            row.suggested_amount.to_string(),
            row.expected_annual_rate,
            row.expected_return_amount.to_string()
        ));
    }

    if plan.available_assets.is_negative() {
        output.push_str("\nNote: invested amount exceeds net worth; suggestions are negative.\n");
    }

    output
}
