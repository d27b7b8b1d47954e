//! Record list formatting
//!
//! Formats the raw record collections for `list` commands. Lists are shown
//! newest first; the position column refers to the record's place in the
//! store, which is what `edit` and `remove` take.

use crate::models::{ExpenseRecord, IncomeRecord, InvestmentRecord};

/// Pair records with their store positions, newest first
///
/// Stable sort: records sharing a date keep store order.
fn newest_first<T, D>(records: &[T], date: D) -> Vec<(usize, &T)>
where
    D: Fn(&T) -> chrono::NaiveDate,
{
    let mut indexed: Vec<(usize, &T)> = records.iter().enumerate().collect();
    indexed.sort_by(|(_, a), (_, b)| date(*b).cmp(&date(*a)));
    indexed
}

/// Format income records as a table, newest first
pub fn format_income_list(records: &[IncomeRecord]) -> String {
    if records.is_empty() {
        return "No income records.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<12} {:<20} {:>12}\n",
        "#", "Date", "Source", "Amount"
    ));

    for (index, record) in newest_first(records, |r| r.date) {
        output.push_str(&format!(
            "{:>4}  {:<12} {:<20} {:>12}\n",
            index,
            record.date.to_string(),
            record.source,
            record.amount.to_string()
        ));
    }

    output
}

/// Format expense records as a table, newest first
pub fn format_expense_list(records: &[ExpenseRecord]) -> String {
    if records.is_empty() {
        return "No expense records.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<12} {:<16} {:<24} {:>12}\n",
        "#", "Date", "Category", "Description", "Amount"
    ));

    for (index, record) in newest_first(records, |r| r.date) {
        output.push_str(&format!(
            "{:>4}  {:<12} {:<16} {:<24} {:>12}\n",
            index,
            record.date.to_string(),
            record.category,
            record.description,
            record.amount.to_string()
        ));
    }

    output
}

/// Format investment records as a table, newest first
pub fn format_investment_list(records: &[InvestmentRecord]) -> String {
    if records.is_empty() {
        return "No investment records.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<12} {:<16} {:<16} {:>12} {:>12} {:>9}\n",
        "#", "Date", "Kind", "Name", "Amount", "Return", "Rate"
    ));

    for (index, record) in newest_first(records, |r| r.date) {
        output.push_str(&format!(
            "{:>4}  {:<12} {:<16} {:<16} {:>12} {:>12} {:>8.2}%\n",
            index,
            record.date.to_string(),
            record.kind,
            record.name,
            record.amount.to_string(),
            record.actual_return.to_string(),
            record.return_rate()
        ));
    }

    output
}
