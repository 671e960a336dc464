//! Keyboard input handling for the lesson player.
//!
//! Handles all keyboard shortcuts: play/pause toggle, seeking, the help
//! overlay, and quitting.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::input::{navigate_to, toggle_playpause};
use crate::player::state::{InputResult, PlayerState};
use crate::timeline::{CueSheet, Transport};

/// Handle a keyboard event.
///
/// This is the main keyboard input handler that processes all key events and
/// updates state or returns control flow signals.
pub fn handle_key_event(
    key: KeyEvent,
    state: &mut PlayerState,
    transport: &mut impl Transport,
    sheet: &mut CueSheet,
) -> InputResult {
    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        state.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Help ===
        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') => {
            toggle_playpause(state, transport, sheet);
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Left => {
            let target = transport.current_time() - state.seek_step;
            navigate_to(state, transport, sheet, target);
            InputResult::Continue
        }
        KeyCode::Right => {
            let target = transport.current_time() + state.seek_step;
            navigate_to(state, transport, sheet, target);
            InputResult::Continue
        }
        KeyCode::Home => {
            navigate_to(state, transport, sheet, 0.0);
            InputResult::Continue
        }
        KeyCode::End => {
            if let Some(total) = transport.duration() {
                navigate_to(state, transport, sheet, total);
            }
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::ClockTransport;

    fn fixture() -> (PlayerState, ClockTransport, CueSheet) {
        let state = PlayerState::new(80, 27, true, 5.0);
        let transport = ClockTransport::new(Some(100.0));
        let sheet = CueSheet::new();
        (state, transport, sheet)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let (mut state, mut transport, mut sheet) = fixture();
        let result = handle_key_event(key(KeyCode::Char('q')), &mut state, &mut transport, &mut sheet);
        assert_eq!(result, InputResult::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let (mut state, mut transport, mut sheet) = fixture();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_key_event(event, &mut state, &mut transport, &mut sheet),
            InputResult::Quit
        );
    }

    #[test]
    fn space_toggles_playback() {
        let (mut state, mut transport, mut sheet) = fixture();
        assert!(transport.paused());

        handle_key_event(key(KeyCode::Char(' ')), &mut state, &mut transport, &mut sheet);
        assert!(!transport.paused());

        handle_key_event(key(KeyCode::Char(' ')), &mut state, &mut transport, &mut sheet);
        assert!(transport.paused());
    }

    #[test]
    fn right_seeks_forward_by_step() {
        let (mut state, mut transport, mut sheet) = fixture();
        transport.seek(50.0);

        handle_key_event(key(KeyCode::Right), &mut state, &mut transport, &mut sheet);

        assert_eq!(transport.current_time(), 55.0);
    }

    #[test]
    fn left_seeks_backward_clamped_at_zero() {
        let (mut state, mut transport, mut sheet) = fixture();
        transport.seek(2.0);

        handle_key_event(key(KeyCode::Left), &mut state, &mut transport, &mut sheet);

        assert_eq!(transport.current_time(), 0.0);
    }

    #[test]
    fn right_clamps_at_duration() {
        let (mut state, mut transport, mut sheet) = fixture();
        transport.seek(98.0);

        handle_key_event(key(KeyCode::Right), &mut state, &mut transport, &mut sheet);

        assert_eq!(transport.current_time(), 100.0);
    }

    #[test]
    fn home_and_end_jump_to_bounds() {
        let (mut state, mut transport, mut sheet) = fixture();
        transport.seek(50.0);

        handle_key_event(key(KeyCode::End), &mut state, &mut transport, &mut sheet);
        assert_eq!(transport.current_time(), 100.0);

        handle_key_event(key(KeyCode::Home), &mut state, &mut transport, &mut sheet);
        assert_eq!(transport.current_time(), 0.0);
    }

    #[test]
    fn seek_keys_disabled_without_seekable_range() {
        let mut state = PlayerState::new(80, 27, false, 5.0);
        let mut transport = ClockTransport::new(None);
        let mut sheet = CueSheet::new();

        handle_key_event(key(KeyCode::Right), &mut state, &mut transport, &mut sheet);

        assert_eq!(transport.current_time(), 0.0);
    }

    #[test]
    fn any_key_closes_help_first() {
        let (mut state, mut transport, mut sheet) = fixture();
        state.show_help = true;

        let result = handle_key_event(key(KeyCode::Char('q')), &mut state, &mut transport, &mut sheet);

        assert_eq!(result, InputResult::Continue);
        assert!(!state.show_help);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (mut state, mut transport, mut sheet) = fixture();
        let result = handle_key_event(key(KeyCode::Char('z')), &mut state, &mut transport, &mut sheet);
        assert_eq!(result, InputResult::Continue);
        assert!(transport.paused());
    }
}
