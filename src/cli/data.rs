//! Data management commands: export, import, theme, reset

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{FintrackError, FintrackResult};
use crate::export::{backup_filename, export_backup, export_report_csv, import_backup, report_filename};
use crate::storage::LedgerStore;

use super::today;

/// Export format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full JSON backup of all data
    Json,
    /// Flat CSV transaction report
    Csv,
}

/// Write a backup or report file.
///
/// Without `--output` the file lands in the current directory under the
/// dated default name.
pub fn handle_export_command(
    store: &LedgerStore,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> FintrackResult<()> {
    let path = output.unwrap_or_else(|| {
        PathBuf::from(match format {
            ExportFormat::Json => backup_filename(today()),
            ExportFormat::Csv => report_filename(today()),
        })
    });

    let file = File::create(&path)
        .map_err(|e| FintrackError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_backup(store.state(), &mut writer)?,
        ExportFormat::Csv => export_report_csv(&store.state().transactions, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| FintrackError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    println!("Exported to {}", path.display());
    Ok(())
}

/// Replace all data from a JSON backup file
pub fn handle_import_command(store: &mut LedgerStore, file: PathBuf) -> FintrackResult<()> {
    let contents = std::fs::read_to_string(&file)
        .map_err(|e| FintrackError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    let state = import_backup(&contents)?;
    let (txns, budgets, goals) = (
        state.transactions.len(),
        state.budgets.len(),
        state.goals.len(),
    );
    store.replace_state(state)?;

    println!(
        "Imported {} transactions, {} budgets, {} goals.",
        txns, budgets, goals
    );
    Ok(())
}

/// Flip the theme flag
pub fn handle_theme_command(store: &mut LedgerStore) -> FintrackResult<()> {
    let theme = store.toggle_theme()?;
    println!("Theme set to {}", theme);
    Ok(())
}

/// Reset all data to the default seed; requires --force
pub fn handle_reset_command(store: &mut LedgerStore, force: bool) -> FintrackResult<()> {
    if !force {
        println!("This permanently deletes all data. Re-run with --force to confirm.");
        return Ok(());
    }

    store.clear()?;
    println!("All data cleared.");
    Ok(())
}
