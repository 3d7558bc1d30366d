//! Goal display formatting

use crate::reports::GoalProgress;

use super::dashboard::progress_bar;

/// Format the goal list with progress bars
pub fn format_goal_list(progress: &[GoalProgress]) -> String {
    if progress.is_empty() {
        return "No goals yet. Add one with 'fintrack goal add'.\n".to_string();
    }

    let mut output = String::new();
    for p in progress {
        let status = if p.reached {
            "Goal Reached!".to_string()
        } else {
            format!("{:.0}% complete", p.percent)
        };
        output.push_str(&format!(
            "{} {:20} {} / {}  [{}] {}\n",
            p.id,
            p.name,
            p.balance,
            p.target_amount,
            progress_bar(p.percent),
            status
        ));
    }

    output
}
