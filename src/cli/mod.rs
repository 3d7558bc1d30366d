//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the store and aggregation layers.

pub mod budget;
pub mod data;
pub mod goal;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use data::{
    handle_export_command, handle_import_command, handle_reset_command, handle_theme_command,
    ExportFormat,
};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_analytics_command, handle_dashboard_command};
pub use transaction::{handle_transaction_command, TransactionCommands};

use clap::ValueEnum;

use crate::models::TransactionKind;
use crate::search::KindFilter;

/// Income/expense selector for CLI arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

impl From<Option<KindArg>> for KindFilter {
    fn from(arg: Option<KindArg>) -> Self {
        match arg {
            None => KindFilter::All,
            Some(KindArg::Income) => KindFilter::Income,
            Some(KindArg::Expense) => KindFilter::Expense,
        }
    }
}

/// Today's date in local time; the reference point for all "current month"
/// views started from the CLI.
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
