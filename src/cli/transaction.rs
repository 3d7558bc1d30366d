//! Transaction management commands

use clap::Subcommand;

use crate::display::format_transaction_register;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, TransactionDraft, TransactionId};
use crate::search::filter_transactions;
use crate::storage::LedgerStore;

use super::{today, KindArg};

#[derive(Debug, Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount, e.g. 12.50
        amount: String,

        /// Income or expense
        #[arg(short, long, value_enum, default_value = "expense")]
        kind: KindArg,

        /// Category label (e.g. Food, Transport, Salary)
        #[arg(short, long)]
        category: String,

        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List transactions, optionally filtered
    List {
        /// Case-insensitive search over note and category
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to income or expense
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction id: full UUID, or the txn-xxxxxxxx form shown by
        /// `transaction list`
        id: String,
    },
}

/// Resolve a user-supplied id string to a transaction id.
///
/// Accepts the full UUID as well as the truncated txn-xxxxxxxx display form
/// (matched as a unique prefix against the current collection).
fn resolve_transaction_id(store: &LedgerStore, input: &str) -> Option<TransactionId> {
    if let Ok(id) = input.parse::<TransactionId>() {
        return Some(id);
    }

    let stripped = input.strip_prefix("txn-").unwrap_or(input);
    let mut matches = store
        .state()
        .transactions
        .iter()
        .filter(|t| t.id.as_uuid().to_string().starts_with(stripped));

    match (matches.next(), matches.next()) {
        (Some(txn), None) => Some(txn.id),
        _ => None,
    }
}

/// Execute a transaction subcommand
pub fn handle_transaction_command(
    store: &mut LedgerStore,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            kind,
            category,
            date,
            note,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| FintrackError::Validation(e.to_string()))?;
            let date = match date {
                Some(s) => s
                    .parse()
                    .map_err(|_| FintrackError::Validation(format!("Invalid date: {}", s)))?,
                None => today(),
            };

            let mut draft = TransactionDraft::new(kind.into(), amount, category, date);
            if let Some(note) = note {
                draft = draft.with_note(note);
            }

            let id = store.add_transaction(draft)?;
            println!("Recorded transaction {}", id);
        }

        TransactionCommands::List { search, kind } => {
            let query = search.unwrap_or_default();
            let matches =
                filter_transactions(&store.state().transactions, &query, kind.into());
            print!("{}", format_transaction_register(&matches));
        }

        TransactionCommands::Delete { id } => {
            // An id that matches nothing is a no-op, not an error
            let removed = match resolve_transaction_id(store, &id) {
                Some(resolved) => store.delete_transaction(resolved)?,
                None => false,
            };
            if removed {
                println!("Deleted transaction matching '{}'", id);
            } else {
                println!("No transaction matching '{}'; nothing deleted.", id);
            }
        }
    }

    Ok(())
}
