//! JSON backup export and import
//!
//! The backup is the full persisted document, pretty-printed. Importing one
//! replaces the in-memory state wholesale, but only after the document both
//! parses and passes full validation.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::AppState;

/// Default backup filename for a given date, e.g. `backup_2024-05-20.json`
pub fn backup_filename(date: NaiveDate) -> String {
    format!("backup_{}.json", date.format("%Y-%m-%d"))
}

/// Write the full state as a pretty-printed JSON backup
pub fn export_backup<W: Write>(state: &AppState, writer: &mut W) -> FintrackResult<()> {
    serde_json::to_writer_pretty(writer, state)
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(())
}

/// Parse and validate a backup document.
///
/// A parse failure is an `Import` error; a document that parses but fails
/// shape validation is a `Validation` error. Either way the caller's current
/// state is untouched.
pub fn import_backup(json_str: &str) -> FintrackResult<AppState> {
    let state: AppState = serde_json::from_str(json_str)
        .map_err(|e| FintrackError::Import(format!("Invalid backup file: {}", e)))?;

    state
        .validate()
        .map_err(|e| FintrackError::Validation(format!("Imported data rejected: {}", e)))?;

    Ok(state)
}
