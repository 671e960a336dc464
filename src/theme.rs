//! Theme configuration for CLI output
//!
//! Centralizes color definitions for command output and prompts. The player
//! chrome uses its own ANSI sequences directly; these helpers style the
//! line-oriented output of `info`, `config`, and friends.

use std::sync::OnceLock;

use crate::config::Config;

/// Raw ANSI escape codes shared across the CLI.
pub mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[97m";
    pub const GREY: &str = "\x1b[37m";
    pub const DARK_GREY: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color assignment for CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub primary: &'static str,
    /// Secondary/dimmed text color
    pub secondary: &'static str,
    /// Accent color for highlights
    pub accent: &'static str,
    /// Error/warning color
    pub error: &'static str,
    /// Success color
    pub success: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::lesson()
    }
}

impl Theme {
    /// Default vlp theme - grey text with a green accent.
    pub fn lesson() -> Self {
        Self {
            primary: ansi::GREY,
            secondary: ansi::DARK_GREY,
            accent: ansi::GREEN,
            error: ansi::RED,
            success: ansi::GREEN,
        }
    }

    /// Classic terminal theme - white text, yellow accent.
    pub fn classic() -> Self {
        Self {
            primary: ansi::WHITE,
            secondary: ansi::DARK_GREY,
            accent: ansi::YELLOW,
            error: ansi::RED,
            success: ansi::GREEN,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            primary: ansi::CYAN,
            secondary: ansi::DARK_GREY,
            accent: ansi::WHITE,
            error: ansi::RED,
            success: ansi::GREEN,
        }
    }

    /// Resolve a theme by its config name, falling back to the default.
    pub fn named(name: &str) -> Self {
        match name {
            "classic" => Self::classic(),
            "ocean" => Self::ocean(),
            _ => Self::lesson(),
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", self.primary, text, ansi::RESET)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        format!("{}{}{}", self.secondary, text, ansi::RESET)
    }

    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", self.accent, text, ansi::RESET)
    }

    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", self.error, text, ansi::RESET)
    }

    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", self.success, text, ansi::RESET)
    }
}

/// The theme selected by the user's configuration.
///
/// Resolved once per process; config errors fall back to the default theme
/// so presentation never blocks a command.
pub fn current_theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    THEME
        .get_or_init(|| {
            Config::load()
                .map(|config| Theme::named(&config.ui.theme))
                .unwrap_or_default()
        })
        .clone()
}
