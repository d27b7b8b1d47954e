//! CSV export functionality
//!
//! Exports the ledger's record collections to a single CSV file, one row per
//! record with a leading record-kind column.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::storage::Ledger;

/// Cents as a plain decimal string ("100.00")
fn cents_decimal(cents: i64) -> String {
    format!("{:.2}", cents as f64 / 100.0)
}

/// Export all ledger records to CSV
pub fn export_ledger_csv<W: Write>(ledger: &Ledger, writer: W) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "kind", "date", "category", "source", "name", "description", "amount",
            "actual_return",
        ])
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    for record in &ledger.income {
        let date = record.date.to_string();
        let amount = cents_decimal(record.amount.cents());
        let row: [&str; 8] = ["income", &date, "", &record.source, "", "", &amount, ""];
        csv_writer
            .write_record(row)
            .map_err(|e| PlannerError::Export(e.to_string()))?;
    }

    for record in &ledger.expenses {
        let date = record.date.to_string();
        let amount = cents_decimal(record.amount.cents());
        let row: [&str; 8] = [
            "expense",
            &date,
            &record.category,
            "",
            "",
            &record.description,
            &amount,
            "",
        ];
        csv_writer
            .write_record(row)
            .map_err(|e| PlannerError::Export(e.to_string()))?;
    }

    for entry in ledger.budgets.entries() {
        let limit = cents_decimal(entry.limit.cents());
        let row: [&str; 8] = ["budget", "", &entry.category, "", "", "", &limit, ""];
        csv_writer
            .write_record(row)
            .map_err(|e| PlannerError::Export(e.to_string()))?;
    }

    for record in &ledger.investments {
        let date = record.date.to_string();
        let amount = cents_decimal(record.amount.cents());
        let actual_return = cents_decimal(record.actual_return.cents());
        let row: [&str; 8] = [
            "investment",
            &date,
            &record.kind,
            "",
            &record.name,
            "",
            &amount,
            &actual_return,
        ];
        csv_writer
            .write_record(row)
            .map_err(|e| PlannerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, IncomeRecord, InvestmentRecord, Money};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_export_empty_ledger_writes_header_only() {
        let ledger = Ledger::default();
        let mut buffer = Vec::new();

        export_ledger_csv(&ledger, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("kind,date,category"));
    }

    #[test]
    fn test_export_all_record_kinds() {
        let mut ledger = Ledger::default();
        ledger
            .income
            .push(IncomeRecord::new(Money::from_cents(10_000), "job", date()));
        ledger.expenses.push(ExpenseRecord::new(
            Money::from_cents(4_000),
            "food",
            "groceries",
            date(),
        ));
        ledger.budgets.set("food", Money::from_cents(5_000)).unwrap();
        ledger.investments.push(InvestmentRecord::new(
            "fund",
            Money::from_cents(100_000),
            Money::from_cents(12_000),
            "stocks",
            date(),
        ));

        let mut buffer = Vec::new();
        export_ledger_csv(&ledger, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("income,2024-01-01,,job,,,100.00,"));
        assert!(output.contains("expense,2024-01-01,food,,,groceries,40.00,"));
        assert!(output.contains("budget,,food,,,,50.00,"));
        assert!(output.contains("investment,2024-01-01,stocks,,fund,,1000.00,120.00"));
    }
}
