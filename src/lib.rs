//! fintrack - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the fintrack
//! application: a single-user income/expense ledger with per-category
//! monthly budgets, savings goals, and derived dashboard/analytics views,
//! persisted as one JSON document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the data file
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, goals, app state)
//! - `storage`: Single-document JSON storage with the ledger store
//! - `reports`: Pure aggregation functions (the derived-view engine)
//! - `search`: Transaction list filtering
//! - `export`: JSON backup and CSV report serialization
//! - `display`: Terminal formatting
//! - `cli`: clap command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod search;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
