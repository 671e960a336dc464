//! Play subcommand handler
//!
//! Loads the lesson (or the embedded demo), guards against non-interactive
//! terminals, and runs the playback session.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::lesson::Lesson;
use crate::player::{play_lesson, PlaybackResult};
use crate::theme::current_theme;

/// Play a lesson file, or the embedded demo lesson when `demo` is set.
pub fn handle_play(path: Option<&Path>, demo: bool, config: &Config) -> Result<()> {
    let theme = current_theme();

    let (lesson, name) = if demo {
        (Lesson::demo(), "demo lesson".to_string())
    } else {
        let path = path.context("a lesson file is required unless --demo is given")?;
        let lesson = Lesson::parse(path)
            .with_context(|| format!("failed to load lesson {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        (lesson, name)
    };

    if !atty::is(atty::Stream::Stdout) {
        bail!("interactive playback requires a terminal");
    }

    for problem in lesson.validate() {
        eprintln!("{}", theme.error_text(&format!("warning: {}", problem)));
    }

    match play_lesson(&lesson, &name, config)? {
        PlaybackResult::Finished => {
            println!("{}", theme.success_text(&format!("Finished: {}", name)));
        }
        PlaybackResult::Interrupted => {
            println!("{}", theme.secondary_text("Stopped by user"));
        }
    }

    Ok(())
}
