//! Savings goal model
//!
//! Goals are independent of transactions until read time: progress is
//! computed from the all-time running balance, not from per-goal deposits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, assigned at creation
    pub id: GoalId,

    /// What the user is saving for
    pub name: String,

    /// Target amount, strictly positive
    #[serde(rename = "targetAmount")]
    pub target_amount: Money,

    /// Stored for document fidelity; progress reads the global balance
    /// instead of this field.
    #[serde(rename = "currentAmount", default)]
    pub current_amount: Money,

    /// Optional deadline, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (target {})", self.name, self.target_amount)
    }
}

/// Input for creating a new goal (everything but the id)
#[derive(Debug, Clone)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: Money,
    pub deadline: Option<NaiveDate>,
}

impl GoalDraft {
    /// Create a draft with no deadline
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        Self {
            name: name.into(),
            target_amount,
            deadline: None,
        }
    }

    /// Attach a deadline
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::BlankName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        Ok(())
    }

    /// Turn the draft into a goal with a freshly assigned id
    pub fn into_goal(self) -> Goal {
        Goal {
            id: GoalId::new(),
            name: self.name,
            target_amount: self.target_amount,
            current_amount: Money::zero(),
            deadline: self.deadline,
        }
    }
}

/// Validation errors for goal drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    BlankName,
    NonPositiveTarget(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "Goal name must not be blank"),
            Self::NonPositiveTarget(target) => {
                write!(f, "Goal target must be positive, got {}", target)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
