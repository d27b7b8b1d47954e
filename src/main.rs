use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use finplan::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_income_command,
    handle_investment_command, handle_report_command, BudgetCommands, ExpenseCommands,
    ExportFormat, IncomeCommands, InvestmentCommands, ReportView,
};
use finplan::config::PlannerPaths;
use finplan::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "finplan",
    version,
    about = "Terminal personal-finance planner",
    long_about = "finplan tracks income, expenses, budgets, and investments in a \
                  local ledger and derives reports and asset-allocation \
                  suggestions from them."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Income record commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense record commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Budget limit commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Investment record and allocation commands
    #[command(subcommand, alias = "invest")]
    Investment(InvestmentCommands),

    /// Print a financial report
    Report {
        /// Which view to print
        #[arg(value_enum, default_value = "full")]
        view: ReportView,
    },

    /// Export records to a file
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// File format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Show resolved configuration paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let mut store = LedgerStore::open(paths.clone())?;

    match cli.command {
        Commands::Income(cmd) => handle_income_command(&mut store, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&mut store, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut store, cmd)?,
        Commands::Investment(cmd) => handle_investment_command(&mut store, cmd)?,
        Commands::Report { view } => handle_report_command(&store, view)?,
        Commands::Export { output, format } => handle_export_command(&store, output, format)?,
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
        }
    }

    Ok(())
}
