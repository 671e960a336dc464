//! CLI definitions for vlp.
//!
//! Lives in the library so the `xtask` man-page generator can reuse the
//! command tree.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Visual Lesson Player - terminal player for time-annotated video lessons
#[derive(Debug, Parser)]
#[command(name = "vlp", version = crate::version(), about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a lesson file
    Play {
        /// Path to the lesson JSON file
        #[arg(required_unless_present = "demo")]
        lesson: Option<PathBuf>,
        /// Play the embedded demo lesson instead of a file
        #[arg(long)]
        demo: bool,
    },
    /// Summarize a lesson file
    Info {
        /// Path to the lesson JSON file
        lesson: PathBuf,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Add newly introduced settings to an existing config file
    Migrate {
        /// Apply changes without prompting
        #[arg(long)]
        yes: bool,
    },
}
