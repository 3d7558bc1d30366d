//! Core data models
//!
//! The persisted document is the serde image of [`AppState`]: transactions,
//! budgets, goals, and the theme flag.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod state;
pub mod transaction;

pub use budget::{validate_budgets, Budget, BudgetValidationError};
pub use category::{ExpenseCategory, IncomeCategory};
pub use goal::{Goal, GoalDraft, GoalValidationError};
pub use ids::{GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use state::{AppState, Theme};
pub use transaction::{
    Transaction, TransactionDraft, TransactionKind, TransactionValidationError,
};
