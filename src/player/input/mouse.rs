//! Mouse input handling for the lesson player.
//!
//! Two click targets exist: the screen region toggles play/pause (clicking
//! the video) and the progress bar row scrubs to the clicked position.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::input::{navigate_to, toggle_playpause};
use crate::player::render::{bar_width, BAR_START_COL};
use crate::player::state::{InputResult, PlayerState};
use crate::timeline::{CueSheet, Transport};

/// Handle a mouse event.
///
/// Currently handles:
/// - Left click on the screen region to toggle play/pause
/// - Left click on the progress bar to seek to that position
pub fn handle_mouse_event(
    mouse: MouseEvent,
    state: &mut PlayerState,
    transport: &mut impl Transport,
    sheet: &mut CueSheet,
) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let progress_row = state.term_rows.saturating_sub(2);

        if (mouse.row as usize) < state.screen_rows() {
            toggle_playpause(state, transport, sheet);
        } else if mouse.row == progress_row {
            scrub_to_column(mouse.column, state, transport, sheet);
        }
    }

    InputResult::Continue
}

/// Seek to the time corresponding to a click on the progress bar.
fn scrub_to_column(
    column: u16,
    state: &mut PlayerState,
    transport: &mut impl Transport,
    sheet: &mut CueSheet,
) {
    let Some(total) = transport.duration() else {
        return; // no seekable range, scrub bar is disabled
    };

    let width = bar_width(state.term_cols);
    if width == 0 || column < BAR_START_COL || column >= BAR_START_COL + width as u16 {
        return;
    }

    let click_pos = (column - BAR_START_COL) as f64;
    let ratio = click_pos / width as f64;
    navigate_to(state, transport, sheet, ratio * total);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::ClockTransport;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    fn fixture() -> (PlayerState, ClockTransport, CueSheet) {
        let state = PlayerState::new(80, 27, true, 5.0);
        let transport = ClockTransport::new(Some(100.0));
        let sheet = CueSheet::new();
        (state, transport, sheet)
    }

    #[test]
    fn click_on_screen_toggles_playback() {
        let (mut state, mut transport, mut sheet) = fixture();
        assert!(transport.paused());

        handle_mouse_event(click(10, 5), &mut state, &mut transport, &mut sheet);

        assert!(!transport.paused());
    }

    #[test]
    fn click_on_bar_start_scrubs_to_zero() {
        let (mut state, mut transport, mut sheet) = fixture();
        transport.seek(50.0);

        // Progress row for a 27-row terminal is row 25
        handle_mouse_event(click(BAR_START_COL, 25), &mut state, &mut transport, &mut sheet);

        assert_eq!(transport.current_time(), 0.0);
        assert!(state.navigation_suspended());
    }

    #[test]
    fn click_halfway_scrubs_to_half_duration() {
        let (mut state, mut transport, mut sheet) = fixture();

        let width = bar_width(80) as u16; // 66
        handle_mouse_event(
            click(BAR_START_COL + width / 2, 25),
            &mut state,
            &mut transport,
            &mut sheet,
        );

        let position = transport.current_time();
        assert!((position - 50.0).abs() < 1.0, "got {}", position);
    }

    #[test]
    fn click_past_bar_end_is_ignored() {
        let (mut state, mut transport, mut sheet) = fixture();
        transport.seek(30.0);

        handle_mouse_event(click(79, 25), &mut state, &mut transport, &mut sheet);

        assert_eq!(transport.current_time(), 30.0);
    }

    #[test]
    fn scrub_disabled_without_duration() {
        let mut state = PlayerState::new(80, 27, false, 5.0);
        let mut transport = ClockTransport::new(None);
        let mut sheet = CueSheet::new();

        handle_mouse_event(click(30, 25), &mut state, &mut transport, &mut sheet);

        assert_eq!(transport.current_time(), 0.0);
        assert!(!state.navigation_suspended());
    }

    #[test]
    fn non_left_clicks_are_ignored() {
        let (mut state, mut transport, mut sheet) = fixture();
        let event = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: 5,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };

        handle_mouse_event(event, &mut state, &mut transport, &mut sheet);

        assert!(transport.paused());
    }
}
