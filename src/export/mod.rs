//! Export functionality
//!
//! Dumps the ledger's records to CSV or JSON for use outside finplan.

pub mod csv;
pub mod json;

pub use csv::export_ledger_csv;
pub use json::export_ledger_json;
