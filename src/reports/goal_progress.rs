//! Goal progress
//!
//! Every goal's progress is the all-time running balance measured against
//! that goal's target. Goals do not partition or reserve balance; they all
//! read the same global figure.

use crate::models::{Goal, GoalId, Money, Transaction};

/// All-time running balance: total income minus total expense over the
/// entire transaction history.
pub fn running_balance(transactions: &[Transaction]) -> Money {
    transactions.iter().map(|t| t.signed_amount()).sum()
}

/// Attainment of one goal against the global balance
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub id: GoalId,
    pub name: String,
    pub target_amount: Money,
    /// The shared balance the percentage was computed from
    pub balance: Money,
    /// clamp(balance / target * 100, 0, 100)
    pub percent: f64,
    /// percent >= 100 (equivalently: balance >= target)
    pub reached: bool,
}

/// Compute progress for one goal given the global balance
pub fn goal_progress(goal: &Goal, balance: Money) -> GoalProgress {
    // Targets are validated positive; clamp keeps the function total anyway
    let percent = if goal.target_amount.is_positive() {
        (balance.cents() as f64 / goal.target_amount.cents() as f64 * 100.0).clamp(0.0, 100.0)
    } else {
        100.0
    };

    GoalProgress {
        id: goal.id,
        name: goal.name.clone(),
        target_amount: goal.target_amount,
        balance,
        percent,
        reached: percent >= 100.0,
    }
}

/// Progress for every goal, all against the same balance
pub fn all_goal_progress(goals: &[Goal], transactions: &[Transaction]) -> Vec<GoalProgress> {
    let balance = running_balance(transactions);
    goals.iter().map(|g| goal_progress(g, balance)).collect()
}
