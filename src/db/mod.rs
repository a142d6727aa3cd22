//! SQLite persistence layer.
//!
//! The default storage backend: a small database in the application data
//! directory holding day records and their clock entries.

/// Core database connection and initialization.
pub mod db;

/// Day record storage implementing the `RecordStore` trait.
pub mod records;
