//! CLI commands for investment records and allocation suggestions

use clap::Subcommand;

use crate::cli::{parse_amount_arg, parse_date_arg};
use crate::display::{format_allocation_plan, format_investment_list};
use crate::engine::compute_allocation_suggestion;
use crate::error::PlannerResult;
use crate::models::{AssetClassPolicy, InvestmentRecord, Money};
use crate::storage::LedgerStore;

/// Investment subcommands
#[derive(Subcommand, Debug)]
pub enum InvestmentCommands {
    /// Add an investment record
    Add {
        /// Amount invested
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Asset class (e.g. "stocks", "bond fund"; free text)
        kind: String,
        /// Name of the holding
        #[arg(short, long, default_value = "")]
        name: String,
        /// Realized return so far, defaults to 0
        #[arg(short = 'r', long = "return")]
        actual_return: Option<String>,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List investment records, newest first
    List,
    /// Remove the investment record at a position
    Remove {
        /// Position shown by 'investment list'
        index: usize,
    },
    /// Suggest how to allocate currently available capital
    Suggest,
}

/// Handle investment commands
pub fn handle_investment_command(
    store: &mut LedgerStore,
    cmd: InvestmentCommands,
) -> PlannerResult<()> {
    match cmd {
        InvestmentCommands::Add {
            amount,
            kind,
            name,
            actual_return,
            date,
        } => {
            let actual_return = match actual_return.as_deref() {
                Some(s) => parse_amount_arg(s)?,
                None => Money::zero(),
            };
            let record = InvestmentRecord::new(
                name,
                parse_amount_arg(&amount)?,
                actual_return,
                kind,
                parse_date_arg(date.as_deref())?,
            );
            store.add_investment(record.clone())?;
            store.save()?;
            println!("Added investment: {} in {}", record.amount, record.kind);
        }
        InvestmentCommands::List => {
            println!("{}", format_investment_list(&store.ledger().investments));
        }
        InvestmentCommands::Remove { index } => {
            let removed = store.remove_investment(index)?;
            store.save()?;
            println!("Removed investment: {} in {}", removed.amount, removed.kind);
        }
        InvestmentCommands::Suggest => {
            let ledger = store.ledger();
            let plan = compute_allocation_suggestion(
                &ledger.income,
                &ledger.expenses,
                &ledger.investments,
                &AssetClassPolicy::standard(),
            );
            println!("{}", format_allocation_plan(&plan));
        }
    }
    Ok(())
}
