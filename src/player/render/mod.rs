//! Rendering components for the lesson player.
//!
//! This module contains all the UI rendering functions for the player:
//! the screen region (overlay/subtitle panes and pause panel), progress bar,
//! status bar, and help overlay.

mod help;
mod overlay;
mod progress;
mod status;

pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use overlay::{center_start_col, render_screen, wrap_text};
pub use progress::{
    bar_width, build_progress_bar_chars, format_timestamp, render_progress_bar, TimebarMarks,
    BAR_START_COL,
};
pub use status::{count_digits, render_separator_line, render_status_bar};
