//! Player state management
//!
//! Contains the central `PlayerState` struct that holds controller state, as
//! well as shared types used across player modules. Playback timing lives in
//! the transport; this struct only tracks what the controller itself owns.

use std::time::{Duration, Instant};

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the main
/// loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Central controller state for the lesson player.
#[derive(Debug)]
pub struct PlayerState {
    // === Navigation ===
    /// Whether the transport reports a seekable range; when false the scrub
    /// bar and seek keys are disabled
    pub seekable: bool,
    /// Seek step for the rewind/forward keys, in seconds
    pub seek_step: f64,
    /// While set, manual navigation suspends action cues; cleared on expiry
    pub nav_deadline: Option<Instant>,

    // === UI ===
    /// Text currently shown in the pause panel, if any
    pub pause_panel: Option<String>,
    /// Whether the help overlay is visible
    pub show_help: bool,

    // === Terminal ===
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,

    // === Rendering flags ===
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    /// Number of status/chrome lines (separator + progress + status bar)
    pub const STATUS_LINES: u16 = 3;

    /// How long action cues stay suspended after a manual navigation.
    pub const NAV_SUSPEND: Duration = Duration::from_millis(500);

    pub fn new(term_cols: u16, term_rows: u16, seekable: bool, seek_step: f64) -> Self {
        Self {
            seekable,
            seek_step,
            nav_deadline: None,
            pause_panel: None,
            show_help: false,
            term_cols,
            term_rows,
            needs_render: true,
        }
    }

    /// Number of rows in the screen region above the chrome lines.
    pub fn screen_rows(&self) -> usize {
        self.term_rows.saturating_sub(Self::STATUS_LINES) as usize
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.needs_render = true;
    }

    /// Enter navigation mode: hide the pause panel and (re)start the
    /// action-cue suspension timer. Each new navigation resets the timer.
    pub fn begin_navigation(&mut self) {
        self.pause_panel = None;
        self.nav_deadline = Some(Instant::now() + Self::NAV_SUSPEND);
        self.needs_render = true;
    }

    /// Whether action cues are currently suspended by navigation.
    pub fn navigation_suspended(&self) -> bool {
        self.nav_deadline.is_some()
    }

    /// Clear the suspension once its deadline has passed.
    ///
    /// Returns true exactly once per navigation, at expiry.
    pub fn take_expired_navigation(&mut self) -> bool {
        match self.nav_deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.nav_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Show the pause panel with the given text.
    pub fn show_pause_panel(&mut self, text: String) {
        self.pause_panel = Some(text);
        self.needs_render = true;
    }

    /// Hide the pause panel.
    pub fn hide_pause_panel(&mut self) {
        if self.pause_panel.take().is_some() {
            self.needs_render = true;
        }
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}
