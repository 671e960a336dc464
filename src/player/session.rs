//! Interactive playback session for a loaded lesson.
//!
//! Owns the terminal for the duration of playback: raw mode, alternate
//! screen, and mouse capture are enabled on entry and restored on every exit
//! path. The loop is single-threaded and event-driven; each iteration polls
//! input, advances cue processing against the transport clock, and redraws
//! when something visible changed.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::{cursor, event, execute, terminal};
use tracing::debug;

use crate::config::Config;
use crate::lesson::{strip_tags, Lesson};
use crate::player::input::handle_event;
use crate::player::render::{
    render_help, render_progress_bar, render_screen, render_separator_line, render_status_bar,
    TimebarMarks,
};
use crate::player::state::{InputResult, PlayerState};
use crate::timeline::{populate, ClockTransport, CueAction, CueSheet, Pane, Transport};

/// How long each loop iteration waits for input before ticking.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Outcome of a playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// The lesson played to the end of its media
    Finished,
    /// The user quit before the end
    Interrupted,
}

/// Restores the terminal on drop, whatever the exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )
        .context("failed to set up terminal")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Play a lesson interactively until the user quits.
///
/// `source_name` is the label shown in the media placeholder, usually the
/// lesson file name.
pub fn play_lesson(lesson: &Lesson, source_name: &str, config: &Config) -> Result<PlaybackResult> {
    let mut transport = ClockTransport::new(lesson.media_duration);
    let mut sheet = CueSheet::new();
    populate(&mut sheet, lesson);

    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    let mut state = PlayerState::new(cols, rows, transport.is_seekable(), config.player.seek_step);
    let marks = TimebarMarks::from_lesson(lesson);
    let annotation_count = lesson.annotation_count();

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    if config.player.autoplay {
        transport.play();
        sheet.enable_actions();
    }
    debug!(source_name, annotation_count, "playback session started");

    let mut last_drawn_tenth = u64::MAX;
    let result = loop {
        if event::poll(FRAME_INTERVAL).context("failed to poll terminal events")? {
            let event = event::read().context("failed to read terminal event")?;
            if handle_event(event, &mut state, &mut transport, &mut sheet) == InputResult::Quit {
                break if transport.ended() {
                    PlaybackResult::Finished
                } else {
                    PlaybackResult::Interrupted
                };
            }
        }

        // Navigation suspension expiry re-enables action cues, but only
        // while playback is running
        if state.take_expired_navigation() && !transport.paused() {
            sheet.enable_actions();
        }

        let now = transport.current_time();
        for action in sheet.tick(now) {
            match action {
                CueAction::JumpTo(target) => {
                    transport.seek(target);
                    state.needs_render = true;
                }
                CueAction::PauseWithText(text) => {
                    state.show_pause_panel(strip_tags(&text));
                    transport.pause();
                    sheet.disable_actions();
                }
            }
        }

        if transport.ended() && !transport.paused() {
            transport.pause();
            sheet.disable_actions();
            state.needs_render = true;
        }

        if state.show_help {
            if state.needs_render {
                render_help(&mut stdout, state.term_cols, state.term_rows)?;
                stdout.flush()?;
                state.needs_render = false;
                last_drawn_tenth = u64::MAX; // Force full redraw after closing
            }
            continue;
        }

        let tenth = (transport.current_time() * 10.0) as u64;
        if state.needs_render || tenth != last_drawn_tenth {
            render_frame(
                &mut stdout,
                &state,
                &transport,
                &sheet,
                &marks,
                source_name,
                annotation_count,
            )?;
            state.needs_render = false;
            last_drawn_tenth = tenth;
        }
    };

    debug!(?result, "playback session ended");
    Ok(result)
}

/// Draw one full frame: screen region, separator, progress bar, status bar.
fn render_frame(
    stdout: &mut io::Stdout,
    state: &PlayerState,
    transport: &impl Transport,
    sheet: &CueSheet,
    marks: &TimebarMarks,
    source_name: &str,
    annotation_count: usize,
) -> Result<()> {
    let now = transport.current_time();

    let overlays: Vec<String> = sheet
        .active_captions(Pane::Overlay, now)
        .iter()
        .map(|c| strip_tags(&c.text))
        .collect();
    let subtitles: Vec<String> = sheet
        .active_captions(Pane::Subtitles, now)
        .iter()
        .map(|c| c.text.clone())
        .collect();

    render_screen(
        stdout,
        state.term_cols,
        state.screen_rows(),
        source_name,
        &overlays,
        &subtitles,
        state.pause_panel.as_deref(),
    )?;

    let sep_row = state.screen_rows() as u16;
    render_separator_line(stdout, state.term_cols, sep_row)?;
    render_progress_bar(
        stdout,
        state.term_cols,
        sep_row + 1,
        now,
        transport.duration(),
        marks,
    )?;
    render_status_bar(
        stdout,
        state.term_cols,
        sep_row + 2,
        transport.paused(),
        state.seekable,
        annotation_count,
    )?;
    stdout.flush()?;

    Ok(())
}
