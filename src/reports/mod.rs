//! Aggregation engine
//!
//! Pure, stateless functions that fold a snapshot of the ledger into the
//! derived views: month summary, category breakdowns, six-month trend,
//! budget consumption, and goal attainment. Same input snapshot, same
//! output; nothing here mutates or caches.

pub mod breakdown;
pub mod budget_progress;
pub mod goal_progress;
pub mod insights;
pub mod summary;
pub mod trend;

pub use breakdown::{category_breakdown, ranked_categories, CategoryTotal};
pub use budget_progress::{budget_progress, BudgetProgress, Severity};
pub use goal_progress::{all_goal_progress, goal_progress, running_balance, GoalProgress};
pub use insights::{spending_insights, SpendingInsights, NO_SPENDING_LABEL};
pub use summary::{month_summary, transactions_in_month, MonthSummary};
pub use trend::{six_month_trend, TrendBucket, TREND_MONTHS};
