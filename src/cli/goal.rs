//! Goal management commands

use clap::Subcommand;

use crate::display::format_goal_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{GoalDraft, GoalId, Money};
use crate::reports::all_goal_progress;
use crate::storage::LedgerStore;

#[derive(Debug, Subcommand)]
pub enum GoalCommands {
    /// Create a new savings goal
    Add {
        /// What you're saving for
        name: String,

        /// Target amount, e.g. 1500
        target: String,

        /// Optional deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
    },

    /// Show goals with progress against the current balance
    List,

    /// Delete a goal by id
    Delete {
        /// Goal id: full UUID, or the goal-xxxxxxxx form shown by `goal list`
        id: String,
    },
}

/// Resolve a user-supplied id string to a goal id (full UUID or unique
/// goal-xxxxxxxx prefix).
fn resolve_goal_id(store: &LedgerStore, input: &str) -> Option<GoalId> {
    if let Ok(id) = input.parse::<GoalId>() {
        return Some(id);
    }

    let stripped = input.strip_prefix("goal-").unwrap_or(input);
    let mut matches = store
        .state()
        .goals
        .iter()
        .filter(|g| g.id.as_uuid().to_string().starts_with(stripped));

    match (matches.next(), matches.next()) {
        (Some(goal), None) => Some(goal.id),
        _ => None,
    }
}

/// Execute a goal subcommand
pub fn handle_goal_command(store: &mut LedgerStore, cmd: GoalCommands) -> FintrackResult<()> {
    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
        } => {
            let target =
                Money::parse(&target).map_err(|e| FintrackError::Validation(e.to_string()))?;

            let mut draft = GoalDraft::new(name, target);
            if let Some(s) = deadline {
                let date = s
                    .parse()
                    .map_err(|_| FintrackError::Validation(format!("Invalid deadline: {}", s)))?;
                draft = draft.with_deadline(date);
            }

            let id = store.add_goal(draft)?;
            println!("Created goal {}", id);
        }

        GoalCommands::List => {
            let progress = all_goal_progress(&store.state().goals, &store.state().transactions);
            print!("{}", format_goal_list(&progress));
        }

        GoalCommands::Delete { id } => {
            let removed = match resolve_goal_id(store, &id) {
                Some(resolved) => store.delete_goal(resolved)?,
                None => false,
            };
            if removed {
                println!("Deleted goal matching '{}'", id);
            } else {
                println!("No goal matching '{}'; nothing deleted.", id);
            }
        }
    }

    Ok(())
}
