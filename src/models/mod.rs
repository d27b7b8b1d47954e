//! Core data models for finplan
//!
//! This module contains the data structures that represent the planning
//! domain: money, the four record kinds, budget limits, and the asset-class
//! allocation policy.

pub mod budget;
pub mod expense;
pub mod income;
pub mod investment;
pub mod money;
pub mod policy;

pub use budget::{BudgetBook, BudgetLimit};
pub use expense::ExpenseRecord;
pub use income::IncomeRecord;
pub use investment::InvestmentRecord;
pub use money::Money;
pub use policy::AssetClassPolicy;
