//! # Punchcard - attendance tracking from the command line
//!
//! Records clock-in/clock-out events, derives the current work status, and
//! aggregates entries into daily, weekly, and monthly summaries.
//!
//! ## Features
//!
//! - **Clock Events**: Record clock-in and clock-out, including overnight sessions
//! - **Status Derivation**: Not-clocked-in / clocked-in / clocked-out from today's entries
//! - **Summaries**: Week, month, last-N-days, and custom-range aggregates
//! - **History**: Browse day records over any date range
//! - **Pluggable Storage**: SQLite or JSON-file record stores behind one trait
//! - **Data Export**: Export records to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchcard::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
