//! CLI commands for budget limits

use clap::Subcommand;

use crate::cli::parse_amount_arg;
use crate::display::format_budget_status;
use crate::engine::compute_budget_status;
use crate::error::PlannerResult;
use crate::storage::LedgerStore;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set (or replace) the monthly limit for a category
    Set {
        /// Expense category to budget
        category: String,
        /// Limit amount
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
    /// Show utilization for every budgeted category
    Status,
}

/// Handle budget commands
pub fn handle_budget_command(store: &mut LedgerStore, cmd: BudgetCommands) -> PlannerResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let limit = parse_amount_arg(&amount)?;
            store.set_budget(&category, limit)?;
            store.save()?;
            println!("Set budget for {}: {}", category, limit);
        }
        BudgetCommands::Status => {
            let ledger = store.ledger();
            let rows = compute_budget_status(&ledger.expenses, &ledger.budgets);
            println!("{}", format_budget_status(&rows));
        }
    }
    Ok(())
}
