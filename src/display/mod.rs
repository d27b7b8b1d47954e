//! Terminal output formatting
//!
//! Formats record lists and engine view rows for display. Everything here
//! returns plain strings; printing is left to the CLI handlers.

pub mod records;
pub mod report;
pub mod views;

pub use records::{format_expense_list, format_income_list, format_investment_list};
pub use views::{
    format_allocation_plan, format_budget_status, format_category_breakdown,
    format_investment_breakdown, format_summary,
};
