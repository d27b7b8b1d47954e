//! finplan - Terminal personal-finance planner
//!
//! This library provides the core functionality for the finplan application:
//! a ledger of income, expense, budget, and investment records, and the pure
//! engine that derives reports and asset-allocation suggestions from it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, records, budgets, allocation policy)
//! - `storage`: JSON file storage layer
//! - `engine`: Pure aggregation and allocation computations
//! - `display`: Terminal output formatting
//! - `export`: CSV/JSON record export
//! - `cli`: Command handlers
//!
//! The engine layer is the heart of the crate: it takes read-only snapshots
//! of the record collections and returns computed view rows, never touching
//! storage or global state itself.

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{PlannerError, PlannerResult};
