//! Input handling for the lesson player.
//!
//! This module handles keyboard and mouse input events, dispatching them to
//! the appropriate handlers and returning control flow signals. The shared
//! control primitives (play/pause toggle, navigation) live here so keyboard
//! and mouse wire the same behavior.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::player::state::{InputResult, PlayerState};
use crate::timeline::{CueSheet, Transport};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    state: &mut PlayerState,
    transport: &mut impl Transport,
    sheet: &mut CueSheet,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state, transport, sheet),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, transport, sheet),
        Event::Resize(new_cols, new_rows) => {
            state.handle_resize(new_cols, new_rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}

/// Toggle between playing and paused.
///
/// Resuming hides the pause panel and re-enables action cues; pausing
/// suspends them, so skip jumps never move a paused playhead.
pub(crate) fn toggle_playpause(
    state: &mut PlayerState,
    transport: &mut impl Transport,
    sheet: &mut CueSheet,
) {
    if transport.paused() {
        transport.play();
        state.hide_pause_panel();
        sheet.enable_actions();
    } else {
        transport.pause();
        sheet.disable_actions();
    }
    state.needs_render = true;
}

/// Move the playhead to `target`, entering navigation mode.
///
/// Manual navigation hides the pause panel and suspends action cues for a
/// short window so it is not immediately overridden by automatic skip logic.
/// Disabled entirely when the transport has no seekable range.
pub(crate) fn navigate_to(
    state: &mut PlayerState,
    transport: &mut impl Transport,
    sheet: &mut CueSheet,
    target: f64,
) {
    if !state.seekable {
        return;
    }
    sheet.disable_actions();
    state.begin_navigation();
    transport.seek(target);
    state.needs_render = true;
}
