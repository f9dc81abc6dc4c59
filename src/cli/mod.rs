//! CLI interface for bounded-levenshtein
//!
//! Provides the command-line front end over the distance engine.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, Variant};
