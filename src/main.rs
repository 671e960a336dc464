//! vlp binary entry point.

use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use vlp::cli::{Cli, Command, ConfigAction};
use vlp::commands;
use vlp::Config;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Play { lesson, demo } => {
            let config = Config::load().context("failed to load configuration")?;
            commands::play::handle_play(lesson.as_deref(), demo, &config)
        }
        Command::Info { lesson } => commands::info::handle_info(&lesson),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "vlp", &mut io::stdout());
            Ok(())
        }
    }
}

/// Route tracing events to stderr, enabled via the VLP_LOG env var.
///
/// Off by default: the player owns the terminal while running and stray log
/// lines would tear the frame.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("VLP_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
