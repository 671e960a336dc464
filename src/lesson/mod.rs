//! Lesson annotation format parser and writer
//!
//! A lesson file is a single JSON object carrying four ordered annotation
//! sequences (`skips`, `subtitles`, `svgs`, `pauses`) plus an optional
//! `media_duration` in seconds. Files are produced by an authoring tool and
//! are read-only as far as the player is concerned: parsed once before
//! playback, never mutated afterwards.

use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while reading or validating a lesson file.
#[derive(Debug, Error)]
pub enum LessonError {
    #[error("failed to read lesson file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid lesson JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A time range the player jumps over automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skip {
    /// Range start in seconds
    pub start: f64,
    /// Range end in seconds
    pub end: f64,
}

/// A subtitle displayed during a time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtitle {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Overlay markup (exported SVG) displayed over the screen during a time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayNote {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// An instant at which playback auto-pauses and shows text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PausePoint {
    /// The named instant in seconds; playback halts one second before it
    pub time: f64,
    pub text: String,
}

/// A complete lesson: annotation sequences plus optional media duration.
///
/// All sequences default to empty so partial exports still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lesson {
    /// Total media duration in seconds, when the exporter knew it.
    ///
    /// Some sources fail to report a duration themselves, hence the
    /// possibility to provide it with the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_duration: Option<f64>,
    #[serde(default)]
    pub skips: Vec<Skip>,
    #[serde(default)]
    pub subtitles: Vec<Subtitle>,
    #[serde(default)]
    pub svgs: Vec<OverlayNote>,
    #[serde(default)]
    pub pauses: Vec<PausePoint>,
}

impl Lesson {
    /// Parse a lesson file from a path.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, LessonError> {
        let file = fs::File::open(path.as_ref())?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Parse a lesson from a reader.
    pub fn parse_reader<R: Read>(reader: R) -> Result<Self, LessonError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse from a string.
    pub fn parse_str(content: &str) -> Result<Self, LessonError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Write the lesson to a path as pretty-printed JSON.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), LessonError> {
        let mut file = fs::File::create(path.as_ref())?;
        self.write_to(&mut file)
    }

    /// Write the lesson to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), LessonError> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Total number of annotation entries across all sequences.
    pub fn annotation_count(&self) -> usize {
        self.skips.len() + self.subtitles.len() + self.svgs.len() + self.pauses.len()
    }

    /// Latest instant referenced by any annotation.
    pub fn last_annotation_end(&self) -> f64 {
        let ranges = self
            .skips
            .iter()
            .map(|s| s.end)
            .chain(self.subtitles.iter().map(|s| s.end))
            .chain(self.svgs.iter().map(|s| s.end));
        let instants = self.pauses.iter().map(|p| p.time);
        ranges.chain(instants).fold(0.0, f64::max)
    }

    /// Check entries against the loose format expectations.
    ///
    /// Time ranges should be non-negative with `end >= start`. Violations are
    /// reported, not rejected: entries stay in place and the player processes
    /// them as-is.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut check_range = |kind: &str, idx: usize, start: f64, end: f64| {
            if start < 0.0 || end < 0.0 {
                problems.push(format!("{} #{}: negative time", kind, idx + 1));
            }
            if end < start {
                problems.push(format!(
                    "{} #{}: end {} before start {}",
                    kind,
                    idx + 1,
                    end,
                    start
                ));
            }
        };

        for (i, s) in self.skips.iter().enumerate() {
            check_range("skip", i, s.start, s.end);
        }
        for (i, s) in self.subtitles.iter().enumerate() {
            check_range("subtitle", i, s.start, s.end);
        }
        for (i, s) in self.svgs.iter().enumerate() {
            check_range("overlay", i, s.start, s.end);
        }
        for (i, p) in self.pauses.iter().enumerate() {
            if p.time < 0.0 {
                problems.push(format!("pause #{}: negative time", i + 1));
            }
        }

        problems
    }

    /// Embedded demo lesson, used by `vlp play --demo` and as test data.
    pub fn demo() -> Self {
        Lesson {
            media_duration: Some(1010.81),
            skips: vec![Skip {
                start: 0.0,
                end: 19.0,
            }],
            subtitles: vec![Subtitle {
                start: 20.0,
                end: 22.0,
                text: "This is a subtitle".to_string(),
            }],
            svgs: vec![OverlayNote {
                start: 21.0,
                end: 24.0,
                text: concat!(
                    r#"<svg viewBox="0 0 640 355">"#,
                    r#"<text fill="red" x="180" y="62">This is SVG</text>"#,
                    r#"<ellipse cx="357" cy="73" fill="none" rx="43" ry="55" stroke="red"/>"#,
                    "</svg>"
                )
                .to_string(),
            }],
            pauses: vec![PausePoint {
                time: 23.0,
                text: "This is a pause".to_string(),
            }],
        }
    }
}

/// Strip markup tags from annotation text, keeping the readable content.
///
/// Overlay entries carry exported SVG markup and pause entries may wrap their
/// text in an anchor tag; the terminal renderer only shows text content.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                if in_tag {
                    in_tag = false;
                    // Keep words from adjacent elements separated
                    if !out.is_empty() && !out.ends_with(' ') {
                        out.push(' ');
                    }
                } else {
                    out.push(c);
                }
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lesson() -> &'static str {
        r#"{
            "media_duration": 1010.81,
            "skips": [{"start": 0, "end": 19}],
            "subtitles": [{"start": 20, "end": 22, "text": "This is a subtitle"}],
            "svgs": [{"start": 21, "end": 24, "text": "<svg><text>This is SVG</text></svg>"}],
            "pauses": [{"time": 23, "text": "This is a pause"}]
        }"#
    }

    #[test]
    fn parse_valid_lesson() {
        let lesson = Lesson::parse_str(sample_lesson()).unwrap();
        assert_eq!(lesson.media_duration, Some(1010.81));
        assert_eq!(lesson.skips.len(), 1);
        assert_eq!(lesson.subtitles.len(), 1);
        assert_eq!(lesson.svgs.len(), 1);
        assert_eq!(lesson.pauses.len(), 1);
    }

    #[test]
    fn parse_entry_fields() {
        let lesson = Lesson::parse_str(sample_lesson()).unwrap();
        assert_eq!(lesson.skips[0], Skip { start: 0.0, end: 19.0 });
        assert_eq!(lesson.subtitles[0].text, "This is a subtitle");
        assert_eq!(lesson.pauses[0].time, 23.0);
    }

    #[test]
    fn missing_sequences_default_to_empty() {
        let lesson = Lesson::parse_str(r#"{"subtitles": []}"#).unwrap();
        assert!(lesson.skips.is_empty());
        assert!(lesson.pauses.is_empty());
        assert_eq!(lesson.media_duration, None);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Lesson::parse_str("{not json").is_err());
        assert!(Lesson::parse_str(r#"{"skips": [{"start": "a"}]}"#).is_err());
    }

    #[test]
    fn roundtrip_preserves_data() {
        let lesson = Lesson::parse_str(sample_lesson()).unwrap();
        let mut buffer = Vec::new();
        lesson.write_to(&mut buffer).unwrap();
        let reparsed = Lesson::parse_str(std::str::from_utf8(&buffer).unwrap()).unwrap();

        assert_eq!(reparsed.media_duration, lesson.media_duration);
        assert_eq!(reparsed.skips, lesson.skips);
        assert_eq!(reparsed.subtitles, lesson.subtitles);
        assert_eq!(reparsed.svgs, lesson.svgs);
        assert_eq!(reparsed.pauses, lesson.pauses);
    }

    #[test]
    fn annotation_count_sums_sequences() {
        let lesson = Lesson::parse_str(sample_lesson()).unwrap();
        assert_eq!(lesson.annotation_count(), 4);
        assert_eq!(Lesson::default().annotation_count(), 0);
    }

    #[test]
    fn last_annotation_end_takes_max() {
        let lesson = Lesson::parse_str(sample_lesson()).unwrap();
        assert_eq!(lesson.last_annotation_end(), 24.0);
    }

    #[test]
    fn validate_accepts_well_formed_lesson() {
        let lesson = Lesson::demo();
        assert!(lesson.validate().is_empty());
    }

    #[test]
    fn validate_reports_inverted_range() {
        let lesson = Lesson::parse_str(
            r#"{"skips": [{"start": 10, "end": 5}]}"#,
        )
        .unwrap();
        let problems = lesson.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("skip #1"));
    }

    #[test]
    fn validate_reports_negative_times() {
        let lesson = Lesson::parse_str(
            r#"{"pauses": [{"time": -3, "text": "x"}], "subtitles": [{"start": -1, "end": 2, "text": "y"}]}"#,
        )
        .unwrap();
        let problems = lesson.validate();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn validate_keeps_entries_in_place() {
        let lesson = Lesson::parse_str(r#"{"skips": [{"start": 10, "end": 5}]}"#).unwrap();
        lesson.validate();
        assert_eq!(lesson.skips.len(), 1);
    }

    #[test]
    fn demo_matches_documented_fixture() {
        let demo = Lesson::demo();
        assert_eq!(demo.media_duration, Some(1010.81));
        assert_eq!(demo.skips[0], Skip { start: 0.0, end: 19.0 });
        assert_eq!(demo.pauses[0].time, 23.0);
    }

    #[test]
    fn strip_tags_removes_markup() {
        assert_eq!(
            strip_tags("<svg><text>This is SVG</text></svg>"),
            "This is SVG"
        );
        assert_eq!(
            strip_tags(r#"<a href="http://example.com">read more</a>"#),
            "read more"
        );
        assert_eq!(strip_tags("plain text"), "plain text");
    }

    #[test]
    fn strip_tags_separates_adjacent_elements() {
        assert_eq!(strip_tags("<p>one</p><p>two</p>"), "one two");
    }
}
