//! Screen-region rendering: overlay pane, subtitle pane, and pause panel.
//!
//! The screen region is everything above the chrome lines. Overlay captions
//! sit at the top, subtitles at the bottom, and the pause panel is a boxed
//! message centered over both.

use std::io::{self, Write};

use anyhow::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap text to a maximum display width.
///
/// Words wider than the limit are hard-split so a single long token cannot
/// overflow the pane.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= max_width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            // Hard-split oversized words
            for c in word.chars() {
                let w = UnicodeWidthChar::width(c).unwrap_or(0);
                if current_width + w > max_width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Column at which centered text of the given width starts (0-indexed).
pub fn center_start_col(term_cols: u16, text_width: usize) -> u16 {
    (term_cols as usize).saturating_sub(text_width) as u16 / 2
}

/// Render the screen region for one frame.
///
/// Clears the region, then draws overlay captions, the media placeholder
/// line, subtitles, and finally the pause panel when present.
pub fn render_screen(
    stdout: &mut io::Stdout,
    term_cols: u16,
    screen_rows: usize,
    source_name: &str,
    overlays: &[String],
    subtitles: &[String],
    pause_panel: Option<&str>,
) -> Result<()> {
    const RED: &str = "\x1b[31m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(screen_rows * 16);

    for row in 0..screen_rows {
        output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1));
    }

    let wrap_width = (term_cols as usize).saturating_sub(4).max(1);

    // Overlay pane: top of the region
    let mut row = 1usize;
    for overlay in overlays {
        for line in wrap_text(overlay, wrap_width) {
            if row >= screen_rows {
                break;
            }
            let col = center_start_col(term_cols, line.width());
            output.push_str(&format!(
                "\x1b[{};{}H{}{}{}",
                row + 1,
                col + 1,
                RED,
                line,
                RESET
            ));
            row += 1;
        }
    }

    // Media placeholder, centered
    if screen_rows > 2 {
        let placeholder = format!("· {} ·", source_name);
        let col = center_start_col(term_cols, placeholder.width());
        output.push_str(&format!(
            "\x1b[{};{}H{}{}{}",
            screen_rows / 2 + 1,
            col + 1,
            DARK_GREY,
            placeholder,
            RESET
        ));
    }

    // Subtitle pane: bottom of the region
    let subtitle_lines: Vec<String> = subtitles
        .iter()
        .flat_map(|s| wrap_text(s, wrap_width))
        .collect();
    let first_row = screen_rows.saturating_sub(subtitle_lines.len() + 1);
    for (i, line) in subtitle_lines.iter().enumerate() {
        let row = first_row + i;
        if row >= screen_rows {
            break;
        }
        let col = center_start_col(term_cols, line.width());
        output.push_str(&format!(
            "\x1b[{};{}H{}{}{}",
            row + 1,
            col + 1,
            WHITE,
            line,
            RESET
        ));
    }

    if let Some(text) = pause_panel {
        render_pause_panel(&mut output, term_cols, screen_rows, text);
    }

    write!(stdout, "{}", output)?;
    Ok(())
}

/// Draw the boxed pause panel centered in the screen region.
fn render_pause_panel(output: &mut String, term_cols: u16, screen_rows: usize, text: &str) {
    const YELLOW: &str = "\x1b[33m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const RESET: &str = "\x1b[0m";

    let hint = "space to resume";

    let inner_width = (term_cols as usize).saturating_sub(8).clamp(1, 56);
    let mut lines = wrap_text(text, inner_width);
    if lines.is_empty() {
        lines.push(String::new());
    }
    let body_width = lines
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .max(hint.width());

    let box_height = lines.len() + 3;
    let top = screen_rows.saturating_sub(box_height) / 2;
    let col = center_start_col(term_cols, body_width + 4);

    let horizontal: String = "═".repeat(body_width + 2);
    output.push_str(&format!(
        "\x1b[{};{}H{}╔{}╗",
        top + 1,
        col + 1,
        YELLOW,
        horizontal
    ));
    for (i, line) in lines.iter().enumerate() {
        let pad = body_width - line.width();
        output.push_str(&format!(
            "\x1b[{};{}H{}║ {}{}{}{} ║",
            top + i + 2,
            col + 1,
            YELLOW,
            WHITE,
            line,
            " ".repeat(pad),
            YELLOW
        ));
    }
    let hint_pad = body_width.saturating_sub(hint.width());
    output.push_str(&format!(
        "\x1b[{};{}H{}║ {}{}{}{} ║",
        top + lines.len() + 2,
        col + 1,
        YELLOW,
        DARK_GREY,
        " ".repeat(hint_pad),
        hint,
        YELLOW
    ));
    output.push_str(&format!(
        "\x1b[{};{}H╚{}╝{}",
        top + lines.len() + 3,
        col + 1,
        horizontal,
        RESET
    ));
}
