//! Info subcommand handler
//!
//! Summarizes a lesson file: annotation counts, duration, and file facts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use humansize::{format_size, DECIMAL};

use crate::lesson::Lesson;
use crate::player::render::format_timestamp;
use crate::theme::current_theme;

/// Print a summary of a lesson file.
pub fn handle_info(path: &Path) -> Result<()> {
    let theme = current_theme();

    let lesson = Lesson::parse(path)
        .with_context(|| format!("failed to load lesson {}", path.display()))?;
    let metadata = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?;

    println!("{}", theme.accent_text(&format!("Lesson: {}", path.display())));

    let size = format_size(metadata.len(), DECIMAL);
    println!("{}", theme.secondary_text(&format!("  size:      {}", size)));

    if let Ok(modified) = metadata.modified() {
        let modified: DateTime<Local> = modified.into();
        println!(
            "{}",
            theme.secondary_text(&format!(
                "  modified:  {}",
                modified.format("%Y-%m-%d %H:%M")
            ))
        );
    }

    let duration = match lesson.media_duration {
        Some(total) => format!("{} ({}s)", format_timestamp(total), total),
        None => "unknown (playback will not be seekable)".to_string(),
    };
    println!("{}", theme.primary_text(&format!("  duration:  {}", duration)));

    println!("{}", theme.primary_text(&format!("  skips:     {}", lesson.skips.len())));
    println!("{}", theme.primary_text(&format!("  subtitles: {}", lesson.subtitles.len())));
    println!("{}", theme.primary_text(&format!("  overlays:  {}", lesson.svgs.len())));
    println!("{}", theme.primary_text(&format!("  pauses:    {}", lesson.pauses.len())));

    if lesson.annotation_count() > 0 {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "  last annotation ends at {}",
                format_timestamp(lesson.last_annotation_end())
            ))
        );
    }

    for problem in lesson.validate() {
        println!("{}", theme.error_text(&format!("  warning: {}", problem)));
    }

    Ok(())
}
