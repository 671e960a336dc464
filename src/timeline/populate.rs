//! Wiring lesson annotations into timeline cues.
//!
//! Registration happens once, synchronously, after the lesson is loaded and
//! before playback starts. There is no dynamic re-registration.

use tracing::{debug, warn};

use crate::lesson::Lesson;
use crate::timeline::{CueAction, CueSheet, Pane};

/// Safety distance around skip ranges, in seconds.
///
/// A skip's action cue stops one second short of the range end, and the jump
/// lands one second past it, so the landing point is never inside the range.
pub const SKIP_MARGIN: f64 = 1.0;

/// Seconds before a pause point's named instant at which playback halts.
pub const PAUSE_LEAD: f64 = 1.0;

/// Marker text shown in the overlay pane while inside a skipped range.
pub const SKIP_MARKER: &str = "\u{2717} skipped \u{2717}";

/// Register cues for every annotation in the lesson.
///
/// Every entry of every sequence is registered; none are dropped.
pub fn populate(sheet: &mut CueSheet, lesson: &Lesson) {
    for skip in &lesson.skips {
        // Degenerate ranges (shorter than the margin) collapse to an instant
        let cue_end = (skip.end - SKIP_MARGIN).max(skip.start);
        sheet.register_action(
            skip.start,
            cue_end,
            CueAction::JumpTo(skip.end + SKIP_MARGIN),
        );
        // Visually mark the range as being skipped
        sheet.register_caption(Pane::Overlay, skip.start, skip.end, SKIP_MARKER);
    }

    for subtitle in &lesson.subtitles {
        sheet.register_caption(
            Pane::Subtitles,
            subtitle.start,
            subtitle.end,
            subtitle.text.clone(),
        );
    }

    for svg in &lesson.svgs {
        sheet.register_caption(Pane::Overlay, svg.start, svg.end, svg.text.clone());
    }

    for pause in &lesson.pauses {
        let halt_at = (pause.time - PAUSE_LEAD).max(0.0);
        sheet.register_action(
            halt_at,
            pause.time,
            CueAction::PauseWithText(pause.text.clone()),
        );
    }

    for problem in lesson.validate() {
        warn!(%problem, "annotation outside expected shape");
    }

    debug!(
        actions = sheet.action_count(),
        captions = sheet.caption_count(),
        "lesson annotations loaded"
    );
}
