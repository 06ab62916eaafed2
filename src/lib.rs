//! Roster: Local-First Employee Records
//!
//! An employee records dashboard for the terminal. Keeps the full collection
//! in memory for filtering and editing, and writes it through to embedded
//! local storage so records survive restarts.

pub mod config;
pub mod employee;
pub mod error;
pub mod export;
pub mod logging;
pub mod query;
pub mod store;
pub mod tooling;
pub mod types;
