//! Help overlay rendering for the lesson player.
//!
//! Displays a centered help overlay with all available controls.

use std::io;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  ╔═══════════════════════════════════════════╗",
    "  ║           Lesson Player Help              ║",
    "  ╠═══════════════════════════════════════════╣",
    "  ║                                           ║",
    "  ║  Playback                                 ║",
    "  ║    Space      Pause / Resume              ║",
    "  ║    <-/->      Seek +/-5s                  ║",
    "  ║    Home/End   Go to start / end           ║",
    "  ║                                           ║",
    "  ║  Mouse                                    ║",
    "  ║    Click bar  Scrub to position           ║",
    "  ║    Click view Pause / Resume              ║",
    "  ║                                           ║",
    "  ║  General                                  ║",
    "  ║    ?          Show this help              ║",
    "  ║    q          Quit player                 ║",
    "  ║                                           ║",
    "  ║         Press any key to close            ║",
    "  ╚═══════════════════════════════════════════╝",
    "",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: usize = 47;

/// Calculate the starting row for centering the help box.
pub fn calc_help_start_row(term_height: u16) -> u16 {
    let box_height = HELP_LINES.len() as u16;
    (term_height.saturating_sub(box_height)) / 2
}

/// Calculate the starting column for centering the help box.
pub fn calc_help_start_col(term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(HELP_BOX_WIDTH) / 2) as u16
}

/// Render the help overlay.
///
/// Clears the screen and draws a centered help box with all shortcuts.
pub fn render_help(stdout: &mut io::Stdout, width: u16, height: u16) -> Result<()> {
    let start_row = calc_help_start_row(height);
    let col = calc_help_start_col(width);

    execute!(stdout, Clear(ClearType::All))?;

    for (i, line) in HELP_LINES.iter().enumerate() {
        let row = start_row + i as u16;
        execute!(
            stdout,
            MoveTo(col, row),
            SetForegroundColor(Color::Green),
            Print(line),
            ResetColor,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lines_not_empty() {
        assert!(!HELP_LINES.is_empty());
    }

    #[test]
    fn help_lines_has_title() {
        let has_title = HELP_LINES
            .iter()
            .any(|line| line.contains("Lesson Player Help"));
        assert!(has_title);
    }

    #[test]
    fn help_lines_has_quit_instruction() {
        let has_quit = HELP_LINES
            .iter()
            .any(|line| line.contains("q") && line.contains("Quit"));
        assert!(has_quit);
    }

    #[test]
    fn help_centering_on_standard_terminal() {
        // 80x24 terminal: box must start inside the screen
        assert!(calc_help_start_col(80) > 0);
        assert_eq!(calc_help_start_row(24), 1);
    }

    #[test]
    fn help_centering_on_tiny_terminal() {
        assert_eq!(calc_help_start_col(10), 0);
        assert_eq!(calc_help_start_row(5), 0);
    }
}
