//! Command handlers.
//!
//! One-shot handlers call the ops modules directly so failures keep their
//! category and map onto exit codes.

pub mod config;
pub mod files;
pub mod paths;
pub mod serve;
