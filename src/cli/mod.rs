//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the storage, engine, and display layers.

pub mod budget;
pub mod expense;
pub mod export;
pub mod income;
pub mod investment;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use investment::{handle_investment_command, InvestmentCommands};
pub use report::{handle_report_command, ReportView};

use chrono::NaiveDate;

use crate::error::{PlannerError, PlannerResult};
use crate::models::Money;

/// Parse a YYYY-MM-DD date argument, defaulting to today when absent
///
/// Malformed dates are a validation error on the `date` field; they are
/// never coerced or silently dropped.
pub(crate) fn parse_date_arg(date: Option<&str>) -> PlannerResult<NaiveDate> {
    match date {
        None => Ok(chrono::Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            PlannerError::validation("date", format!("'{}' is not a YYYY-MM-DD date", s))
        }),
    }
}

/// Parse a money amount argument
pub(crate) fn parse_amount_arg(amount: &str) -> PlannerResult<Money> {
    Money::parse(amount).map_err(|e| PlannerError::validation("amount", e.to_string()))
}
