//! Application state root aggregate
//!
//! `AppState` is the single source of truth: every derived view is a pure
//! function of a snapshot of it. It is created once at startup (from the
//! persisted document, or the default seed) and mutated only through the
//! ledger store's operation set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::budget::{validate_budgets, Budget};
use super::goal::Goal;
use super::money::Money;
use super::transaction::Transaction;

/// UI color scheme flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// The root aggregate: all persisted data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Transactions, newest-first insertion order
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Monthly budgets, one entry per category
    #[serde(default)]
    pub budgets: Vec<Budget>,

    /// Savings goals, in creation order
    #[serde(default)]
    pub goals: Vec<Goal>,

    /// Color scheme flag
    #[serde(default)]
    pub theme: Theme,
}

impl Default for AppState {
    /// The default seed: no transactions or goals, light theme, and four
    /// starter budget categories.
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            budgets: vec![
                Budget::new("Food", Money::from_units(5000)),
                Budget::new("Transport", Money::from_units(2000)),
                Budget::new("Study", Money::from_units(1000)),
                Budget::new("Shopping", Money::from_units(2000)),
            ],
            goals: Vec::new(),
            theme: Theme::Light,
        }
    }
}

impl AppState {
    /// Validate the whole aggregate.
    ///
    /// Applied to imported documents before they replace the current state:
    /// amounts, limits and targets must be positive, ids unique, and budget
    /// categories unique. Enum membership (`type`, `theme`) is already
    /// enforced by typed deserialization.
    pub fn validate(&self) -> Result<(), String> {
        let mut txn_ids = HashSet::new();
        for txn in &self.transactions {
            if !txn.amount.is_positive() {
                return Err(format!(
                    "Transaction {} has non-positive amount {}",
                    txn.id, txn.amount
                ));
            }
            if txn.category.trim().is_empty() {
                return Err(format!("Transaction {} has a blank category", txn.id));
            }
            if !txn_ids.insert(txn.id) {
                return Err(format!("Duplicate transaction id: {}", txn.id));
            }
        }

        validate_budgets(&self.budgets).map_err(|e| e.to_string())?;

        let mut goal_ids = HashSet::new();
        for goal in &self.goals {
            if !goal.target_amount.is_positive() {
                return Err(format!(
                    "Goal {} has non-positive target {}",
                    goal.id, goal.target_amount
                ));
            }
            if !goal_ids.insert(goal.id) {
                return Err(format!("Duplicate goal id: {}", goal.id));
            }
        }

        Ok(())
    }
}
