//! CLI command for exporting records

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{PlannerError, PlannerResult};
use crate::export::{export_ledger_csv, export_ledger_json};
use crate::storage::LedgerStore;

/// Export file format
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Handle the export command
pub fn handle_export_command(
    store: &LedgerStore,
    output: PathBuf,
    format: ExportFormat,
) -> PlannerResult<()> {
    let file = File::create(&output).map_err(|e| {
        PlannerError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_ledger_csv(store.ledger(), &mut writer)?,
        ExportFormat::Json => export_ledger_json(store.ledger(), &mut writer)?,
    }

    println!("Exported ledger to {}", output.display());
    Ok(())
}
