//! Budget management commands
//!
//! Set/remove edit a working copy of the collection and hand it back through
//! the store's wholesale `replace_budgets`; there is no per-entry merge at
//! the store boundary.

use clap::Subcommand;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Budget, Money};
use crate::reports::{budget_progress, Severity};
use crate::storage::LedgerStore;

use super::today;

#[derive(Debug, Subcommand)]
pub enum BudgetCommands {
    /// Show budgets with current-month consumption
    List,

    /// Set (add or update) the monthly limit for a category
    Set {
        /// Category label (e.g. Food)
        category: String,

        /// Monthly limit, e.g. 500 or 499.99
        limit: String,
    },

    /// Remove the budget for a category
    Remove {
        /// Category label
        category: String,
    },
}

/// Execute a budget subcommand
pub fn handle_budget_command(store: &mut LedgerStore, cmd: BudgetCommands) -> FintrackResult<()> {
    match cmd {
        BudgetCommands::List => {
            let progress = budget_progress(&store.state().budgets, &store.state().transactions, today());
            if progress.is_empty() {
                println!("No budgets configured.");
                return Ok(());
            }

            println!("{:16} {:>12} {:>12} {:>8}", "Category", "Limit", "Spent", "Used");
            println!("{}", "-".repeat(52));
            for p in &progress {
                let marker = match p.severity {
                    Severity::Normal => "",
                    Severity::Warning => "  (warning)",
                    Severity::Critical => "  (critical)",
                };
                println!(
                    "{:16} {:>12} {:>12} {:>7.1}%{}",
                    p.category,
                    p.limit.to_string(),
                    p.spent.to_string(),
                    p.percent,
                    marker
                );
            }
        }

        BudgetCommands::Set { category, limit } => {
            let limit =
                Money::parse(&limit).map_err(|e| FintrackError::Validation(e.to_string()))?;

            let mut budgets = store.state().budgets.clone();
            match budgets.iter_mut().find(|b| b.category == category) {
                Some(existing) => existing.limit = limit,
                None => budgets.push(Budget::new(category.clone(), limit)),
            }

            store.replace_budgets(budgets)?;
            println!("Budget for '{}' set to {} / month", category, limit);
        }

        BudgetCommands::Remove { category } => {
            let mut budgets = store.state().budgets.clone();
            let before = budgets.len();
            budgets.retain(|b| b.category != category);

            if budgets.len() == before {
                return Err(FintrackError::budget_not_found(category));
            }

            store.replace_budgets(budgets)?;
            println!("Removed budget for '{}'", category);
        }
    }

    Ok(())
}
