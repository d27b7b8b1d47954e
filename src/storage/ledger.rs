//! Ledger store
//!
//! Holds the four record collections in memory and persists them as one
//! JSON document. All mutation goes through this store; the engine only ever
//! sees read-only snapshots of the collections. Records are addressed by
//! position, matching how list views number them.

use serde::{Deserialize, Serialize};

use crate::config::PlannerPaths;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{BudgetBook, ExpenseRecord, IncomeRecord, InvestmentRecord, Money};
use crate::storage::file_io;

/// The serialized record snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub income: Vec<IncomeRecord>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    pub budgets: BudgetBook,
    #[serde(default)]
    pub investments: Vec<InvestmentRecord>,
}

impl Ledger {
    /// Validate every record in the snapshot
    ///
    /// Malformed records are rejected, never coerced or dropped: the first
    /// failure is reported with the name of the offending field.
    pub fn validate(&self) -> PlannerResult<()> {
        for record in &self.income {
            record
                .validate()
                .map_err(|e| PlannerError::validation(e.field(), e.to_string()))?;
        }
        for record in &self.expenses {
            record
                .validate()
                .map_err(|e| PlannerError::validation(e.field(), e.to_string()))?;
        }
        for record in &self.investments {
            record
                .validate()
                .map_err(|e| PlannerError::validation(e.field(), e.to_string()))?;
        }
        Ok(())
    }
}

/// Persistent store for the ledger
#[derive(Debug)]
pub struct LedgerStore {
    paths: PlannerPaths,
    ledger: Ledger,
}

impl LedgerStore {
    /// Open the store, loading the data file if it exists
    ///
    /// A missing file yields an empty ledger; a corrupt or invalid one is an
    /// error.
    pub fn open(paths: PlannerPaths) -> PlannerResult<Self> {
        let ledger: Ledger = file_io::read_json(paths.ledger_file())?;
        ledger.validate()?;
        Ok(Self { paths, ledger })
    }

    /// Read-only view of the current snapshot
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Persist the current snapshot atomically
    pub fn save(&self) -> PlannerResult<()> {
        self.paths.ensure_directories()?;
        file_io::write_json_atomic(self.paths.ledger_file(), &self.ledger)
    }

    /// Append an income record
    pub fn add_income(&mut self, record: IncomeRecord) -> PlannerResult<()> {
        record
            .validate()
            .map_err(|e| PlannerError::validation(e.field(), e.to_string()))?;
        self.ledger.income.push(record);
        Ok(())
    }

    /// Replace the income record at a position
    pub fn update_income(&mut self, index: usize, record: IncomeRecord) -> PlannerResult<()> {
        record
            .validate()
            .map_err(|e| PlannerError::validation(e.field(), e.to_string()))?;
        let slot = self
            .ledger
            .income
            .get_mut(index)
            .ok_or_else(|| PlannerError::income_not_found(index))?;
        *slot = record;
        Ok(())
    }

    /// Remove the income record at a position
    pub fn remove_income(&mut self, index: usize) -> PlannerResult<IncomeRecord> {
        if index >= self.ledger.income.len() {
            return Err(PlannerError::income_not_found(index));
        }
        Ok(self.ledger.income.remove(index))
    }

    /// Append an expense record
    pub fn add_expense(&mut self, record: ExpenseRecord) -> PlannerResult<()> {
        record
            .validate()
            .map_err(|e| PlannerError::validation(e.field(), e.to_string()))?;
        self.ledger.expenses.push(record);
        Ok(())
    }

    /// Remove the expense record at a position
    pub fn remove_expense(&mut self, index: usize) -> PlannerResult<ExpenseRecord> {
        if index >= self.ledger.expenses.len() {
            return Err(PlannerError::expense_not_found(index));
        }
        Ok(self.ledger.expenses.remove(index))
    }

    /// Set (or replace) the budget limit for a category
    pub fn set_budget(&mut self, category: &str, limit: Money) -> PlannerResult<()> {
        self.ledger
            .budgets
            .set(category, limit)
            .map_err(|e| PlannerError::validation(e.field(), e.to_string()))
    }

    /// Append an investment record
    pub fn add_investment(&mut self, record: InvestmentRecord) -> PlannerResult<()> {
        record
            .validate()
            .map_err(|e| PlannerError::validation(e.field(), e.to_string()))?;
        self.ledger.investments.push(record);
        Ok(())
    }

    /// Remove the investment record at a position
    pub fn remove_investment(&mut self, index: usize) -> PlannerResult<InvestmentRecord> {
        if index >= self.ledger.investments.len() {
            return Err(PlannerError::investment_not_found(index));
        }
        Ok(self.ledger.investments.remove(index))
    }
}
