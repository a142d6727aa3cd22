//! Core library modules for the punchcard application.
//!
//! The engine proper is `record`, `duration`, `tracker`, and `summary`;
//! collaborators it depends on (`clock`, `store`) are traits with
//! interchangeable implementations. The rest is ambient infrastructure:
//! configuration, formatting, console views, messaging, and export.

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod duration;
pub mod error;
pub mod export;
pub mod formatter;
pub mod json_store;
pub mod messages;
pub mod record;
pub mod store;
pub mod summary;
pub mod tracker;
pub mod view;
