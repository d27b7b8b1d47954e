//! CLI commands for expense records

use clap::Subcommand;

use crate::cli::{parse_amount_arg, parse_date_arg};
use crate::display::format_expense_list;
use crate::error::PlannerResult;
use crate::models::ExpenseRecord;
use crate::storage::LedgerStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add an expense record
    Add {
        /// Amount (e.g. "40" or "39.99")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Expense category (also the budget key)
        category: String,
        /// What the money went to
        #[arg(short = 'm', long, default_value = "")]
        description: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expense records, newest first
    List,
    /// Remove the expense record at a position
    Remove {
        /// Position shown by 'expense list'
        index: usize,
    },
}

/// Handle expense commands
pub fn handle_expense_command(store: &mut LedgerStore, cmd: ExpenseCommands) -> PlannerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let record = ExpenseRecord::new(
                parse_amount_arg(&amount)?,
                category,
                description,
                parse_date_arg(date.as_deref())?,
            );
            store.add_expense(record.clone())?;
            store.save()?;
            println!("Added expense: {} in {}", record.amount, record.category);
        }
        ExpenseCommands::List => {
            println!("{}", format_expense_list(&store.ledger().expenses));
        }
        ExpenseCommands::Remove { index } => {
            let removed = store.remove_expense(index)?;
            store.save()?;
            println!("Removed expense: {} in {}", removed.amount, removed.category);
        }
    }
    Ok(())
}
