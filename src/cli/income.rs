//! CLI commands for income records

use clap::Subcommand;

use crate::cli::{parse_amount_arg, parse_date_arg};
use crate::display::format_income_list;
use crate::error::PlannerResult;
use crate::models::IncomeRecord;
use crate::storage::LedgerStore;

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Add an income record
    Add {
        /// Amount (e.g. "1500" or "1500.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Where the income came from
        source: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List income records, newest first
    List,
    /// Replace the income record at a position
    Edit {
        /// Position shown by 'income list'
        index: usize,
        /// New amount
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// New source
        source: String,
        /// New date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Remove the income record at a position
    Remove {
        /// Position shown by 'income list'
        index: usize,
    },
}

/// Handle income commands
pub fn handle_income_command(store: &mut LedgerStore, cmd: IncomeCommands) -> PlannerResult<()> {
    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            date,
        } => {
            let record = IncomeRecord::new(
                parse_amount_arg(&amount)?,
                source,
                parse_date_arg(date.as_deref())?,
            );
            store.add_income(record.clone())?;
            store.save()?;
            println!("Added income: {} from {}", record.amount, record.source);
        }
        IncomeCommands::List => {
            println!("{}", format_income_list(&store.ledger().income));
        }
        IncomeCommands::Edit {
            index,
            amount,
            source,
            date,
        } => {
            let record = IncomeRecord::new(
                parse_amount_arg(&amount)?,
                source,
                parse_date_arg(date.as_deref())?,
            );
            store.update_income(index, record.clone())?;
            store.save()?;
            println!("Updated income at position {}: {}", index, record.amount);
        }
        IncomeCommands::Remove { index } => {
            let removed = store.remove_income(index)?;
            store.save()?;
            println!("Removed income: {} from {}", removed.amount, removed.source);
        }
    }
    Ok(())
}
