//! Budget model
//!
//! One entry per expense category with a monthly spending ceiling. The
//! category string is the key; lookups and progress computations assume it is
//! unique within the collection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A monthly spending limit for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Category label, matching transaction categories
    pub category: String,

    /// Monthly ceiling, strictly positive
    pub limit: Money,
}

impl Budget {
    /// Create a new budget entry
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::BlankCategory);
        }
        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit {
                category: self.category.clone(),
                limit: self.limit,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} / month", self.category, self.limit)
    }
}

/// Validate a whole budget collection: each entry valid, categories unique
pub fn validate_budgets(budgets: &[Budget]) -> Result<(), BudgetValidationError> {
    let mut seen = std::collections::HashSet::new();
    for budget in budgets {
        budget.validate()?;
        if !seen.insert(budget.category.as_str()) {
            return Err(BudgetValidationError::DuplicateCategory(
                budget.category.clone(),
            ));
        }
    }
    Ok(())
}

/// Validation errors for budget entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    BlankCategory,
    NonPositiveLimit { category: String, limit: Money },
    DuplicateCategory(String),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankCategory => write!(f, "Budget category must not be blank"),
            Self::NonPositiveLimit { category, limit } => write!(
                f,
                "Budget limit for '{}' must be positive, got {}",
                category, limit
            ),
            Self::DuplicateCategory(category) => {
                write!(f, "Duplicate budget category: '{}'", category)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
