use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_analytics_command, handle_budget_command, handle_dashboard_command,
    handle_export_command, handle_goal_command, handle_import_command, handle_reset_command,
    handle_theme_command, handle_transaction_command, BudgetCommands, ExportFormat, GoalCommands,
    TransactionCommands,
};
use fintrack::config::FintrackPaths;
use fintrack::models::{ExpenseCategory, IncomeCategory};
use fintrack::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "fintrack is a single-user personal finance tracker. It records \
                  income and expense transactions, tracks per-category monthly \
                  budgets and savings goals, and renders dashboards and analytics \
                  from a single locally persisted JSON document."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show the current-month dashboard
    Dashboard,

    /// Show the six-month analytics view
    Analytics,

    /// Export a JSON backup or CSV report
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file (defaults to a dated name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all data from a JSON backup
    Import {
        /// Path to the backup file
        file: PathBuf,
    },

    /// List the standard category labels
    Categories,

    /// Toggle between light and dark theme
    Theme,

    /// Delete all data and restore the default budgets
    Reset {
        /// Confirm the reset
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let mut store = LedgerStore::open(&paths)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&mut store, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut store, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&mut store, cmd)?,
        Some(Commands::Dashboard) => handle_dashboard_command(&store)?,
        Some(Commands::Analytics) => handle_analytics_command(&store)?,
        Some(Commands::Export { format, output }) => {
            handle_export_command(&store, format, output)?
        }
        Some(Commands::Import { file }) => handle_import_command(&mut store, file)?,
        Some(Commands::Categories) => {
            println!("Expense categories:");
            for category in ExpenseCategory::ALL {
                println!("  {}", category);
            }
            println!();
            println!("Income categories:");
            for category in IncomeCategory::ALL {
                println!("  {}", category);
            }
        }
        Some(Commands::Theme) => handle_theme_command(&mut store)?,
        Some(Commands::Reset { force }) => handle_reset_command(&mut store, force)?,
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.data_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!("Theme:          {}", store.state().theme);
        }
        None => {
            println!("fintrack - Terminal-based personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' to see this month at a glance.");
        }
    }

    Ok(())
}
