//! Subcommand handlers for the vlp CLI.

pub mod config;
pub mod info;
pub mod play;
