//! Dashboard and analytics commands

use crate::display::{format_analytics, format_dashboard};
use crate::error::FintrackResult;
use crate::storage::LedgerStore;

use super::today;

/// Print the dashboard for the current month
pub fn handle_dashboard_command(store: &LedgerStore) -> FintrackResult<()> {
    print!("{}", format_dashboard(store.state(), today()));
    Ok(())
}

/// Print the analytics view for the six months ending now
pub fn handle_analytics_command(store: &LedgerStore) -> FintrackResult<()> {
    print!("{}", format_analytics(store.state(), today()));
    Ok(())
}
