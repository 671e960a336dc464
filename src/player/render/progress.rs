//! Progress/scrub bar rendering for the lesson player.
//!
//! Displays playback progress with annotation indicators: skipped ranges and
//! pause points. The bar doubles as the scrub target for mouse clicks.

use std::io::{self, Write};

use anyhow::Result;

use crate::lesson::Lesson;

/// First column of the bar (one cell of padding).
pub const BAR_START_COL: u16 = 1;

/// Bar width for a given terminal width, accounting for padding and the
/// time display.
pub fn bar_width(term_cols: u16) -> usize {
    (term_cols as usize).saturating_sub(14)
}

/// Format a position in seconds as an MM:SS time label.
///
/// Positions are rounded to the nearest whole second first.
pub fn format_timestamp(seconds: f64) -> String {
    let total_secs = seconds.round().max(0.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Annotation positions projected onto the bar.
///
/// Extracted from the lesson once at startup; the bar renderer only needs
/// the time geometry, not the annotation payloads.
#[derive(Debug, Clone, Default)]
pub struct TimebarMarks {
    /// Skipped ranges as (start, end) pairs
    pub skips: Vec<(f64, f64)>,
    /// Pause-point instants
    pub pauses: Vec<f64>,
}

impl TimebarMarks {
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            skips: lesson.skips.iter().map(|s| (s.start, s.end)).collect(),
            pauses: lesson.pauses.iter().map(|p| p.time).collect(),
        }
    }
}

/// Build the progress bar character array.
///
/// Creates a visual representation of the bar including the playhead
/// position, skipped spans, and pause-point markers.
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    marks: &TimebarMarks,
) -> (Vec<char>, usize) {
    let progress = if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    let project = |time: f64| -> usize {
        if total_duration > 0.0 {
            ((time / total_duration) * bar_width as f64) as usize
        } else {
            0
        }
    };

    for &(start, end) in &marks.skips {
        let from = project(start).min(bar_width);
        let to = project(end).min(bar_width);
        for cell in bar.iter_mut().take(to).skip(from) {
            *cell = '╌';
        }
    }

    for &time in &marks.pauses {
        let pos = project(time);
        if pos < bar_width {
            bar[pos] = '◆';
        }
    }

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the progress bar with annotation marks and the time label.
///
/// When the transport has no seekable range the bar is rendered flat and the
/// total reads `--:--`; the playhead and marks are omitted.
pub fn render_progress_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    current_time: f64,
    total_duration: Option<f64>,
    marks: &TimebarMarks,
) -> Result<()> {
    let bar_width = bar_width(width);

    // ANSI color codes
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1)); // Move cursor
    output.push(' ');

    let time_display = match total_duration {
        Some(total) => {
            let (bar, filled) = build_progress_bar_chars(bar_width, current_time, total, marks);

            output.push_str(GREEN);
            for (i, &c) in bar.iter().enumerate() {
                if i < filled {
                    if c == '◆' {
                        output.push_str(YELLOW);
                        output.push(c);
                        output.push_str(GREEN);
                    } else {
                        output.push('━');
                    }
                } else if i == filled {
                    output.push_str(WHITE);
                    output.push(c);
                } else if c == '◆' {
                    output.push_str(YELLOW);
                    output.push(c);
                    output.push_str(GREEN);
                } else {
                    output.push_str(DARK_GREY);
                    output.push(c);
                }
            }

            format!(
                " {}/{}",
                format_timestamp(current_time),
                format_timestamp(total)
            )
        }
        None => {
            // Not seekable: flat disabled bar
            output.push_str(DARK_GREY);
            for _ in 0..bar_width {
                output.push('─');
            }
            format!(" {}/--:--", format_timestamp(current_time))
        }
    };

    output.push_str(GREY);
    output.push_str(&time_display);

    // Fill remaining width
    let used_width = 1 + bar_width + time_display.len();
    let remaining = (width as usize).saturating_sub(used_width);
    for _ in 0..remaining {
        output.push(' ');
    }

    output.push_str("\x1b[0m"); // Reset
    write!(stdout, "{}", output)?;

    Ok(())
}
