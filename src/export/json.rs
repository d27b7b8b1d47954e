//! JSON export functionality
//!
//! Exports the full ledger as pretty-printed JSON, the same shape as the
//! data file.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::storage::Ledger;

/// Export the ledger to pretty-printed JSON
pub fn export_ledger_json<W: Write>(ledger: &Ledger, writer: W) -> PlannerResult<()> {
    serde_json::to_writer_pretty(writer, ledger)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    Ok(())
}
