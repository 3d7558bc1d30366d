//! Export and import
//!
//! JSON backups of the full document, and the flat CSV transaction report.

pub mod csv;
pub mod json;

pub use csv::{export_report_csv, report_filename};
pub use json::{backup_filename, export_backup, import_backup};
