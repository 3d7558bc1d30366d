//! Ledger store
//!
//! Owns the authoritative [`AppState`] and exposes the full mutation
//! operation set. The document is read once when the store is opened and
//! atomically rewritten after every mutation, so the on-disk state never
//! trails the in-memory state by more than the current operation. A failed
//! write surfaces as a `Storage` error while the in-memory state stays
//! authoritative; retrying the operation retries the write.

use std::path::PathBuf;

use crate::config::FintrackPaths;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    validate_budgets, AppState, Budget, Goal, GoalDraft, GoalId, Theme, Transaction,
    TransactionDraft, TransactionId,
};

use super::file_io::{read_json, write_json_atomic};

/// Holds the authoritative state and persists it after every mutation
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    state: AppState,
}

impl LedgerStore {
    /// Open the store, reading the persisted document if one exists.
    ///
    /// A missing file yields the default seed; a present but unreadable or
    /// invalid file is a `Storage` error rather than silent data loss.
    pub fn open(paths: &FintrackPaths) -> FintrackResult<Self> {
        paths.ensure_directories()?;
        Self::open_at(paths.data_file())
    }

    /// Open the store against an explicit file path
    pub fn open_at(path: PathBuf) -> FintrackResult<Self> {
        let state: AppState = read_json(&path)?;
        state.validate().map_err(|e| {
            FintrackError::Storage(format!(
                "Persisted data at {} is invalid: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self { path, state })
    }

    /// Snapshot of the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Record a new transaction.
    ///
    /// Validates the draft, assigns a fresh id, and prepends so iteration
    /// order stays most-recent-first. Returns the assigned id.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> FintrackResult<TransactionId> {
        draft
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let txn = draft.into_transaction();
        let id = txn.id;
        self.state.transactions.insert(0, txn);
        self.persist()?;
        Ok(id)
    }

    /// Delete a transaction by id.
    ///
    /// Returns whether anything was removed; an absent id is a no-op, not an
    /// error. Survivors keep their order.
    pub fn delete_transaction(&mut self, id: TransactionId) -> FintrackResult<bool> {
        let before = self.state.transactions.len();
        self.state.transactions.retain(|t| t.id != id);
        if self.state.transactions.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Replace the whole budget collection. No merge semantics.
    pub fn replace_budgets(&mut self, budgets: Vec<Budget>) -> FintrackResult<()> {
        validate_budgets(&budgets).map_err(|e| FintrackError::Validation(e.to_string()))?;
        self.state.budgets = budgets;
        self.persist()
    }

    /// Create a new goal. Goals append in creation order.
    pub fn add_goal(&mut self, draft: GoalDraft) -> FintrackResult<GoalId> {
        draft
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let goal = draft.into_goal();
        let id = goal.id;
        self.state.goals.push(goal);
        self.persist()?;
        Ok(id)
    }

    /// Delete a goal by id; absent ids are a no-op.
    pub fn delete_goal(&mut self, id: GoalId) -> FintrackResult<bool> {
        let before = self.state.goals.len();
        self.state.goals.retain(|g| g.id != id);
        if self.state.goals.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Flip the theme flag, returning the new value
    pub fn toggle_theme(&mut self) -> FintrackResult<Theme> {
        self.state.theme = self.state.theme.toggled();
        self.persist()?;
        Ok(self.state.theme)
    }

    /// Wholesale state replacement (the import path).
    ///
    /// The incoming document must pass full validation; on failure the prior
    /// state is left untouched.
    pub fn replace_state(&mut self, state: AppState) -> FintrackResult<()> {
        state
            .validate()
            .map_err(|e| FintrackError::Validation(format!("Imported data rejected: {}", e)))?;
        self.state = state;
        self.persist()
    }

    /// Reset everything to the default seed
    pub fn clear(&mut self) -> FintrackResult<()> {
        self.state = AppState::default();
        self.persist()
    }

    /// Convenience lookups used by the CLI layer
    pub fn find_transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.state.transactions.iter().find(|t| t.id == id)
    }

    pub fn find_goal(&self, id: GoalId) -> Option<&Goal> {
        self.state.goals.iter().find(|g| g.id == id)
    }

    fn persist(&self) -> FintrackResult<()> {
        write_json_atomic(&self.path, &self.state)
    }
}
