//! Snapshot tests for deterministic rendering output.

use vlp::lesson::Lesson;
use vlp::player::render::{build_progress_bar_chars, TimebarMarks};

#[test]
fn progress_bar_snapshot_with_demo_marks() {
    let marks = TimebarMarks::from_lesson(&Lesson::demo());
    let (bar, filled) = build_progress_bar_chars(30, 30.0, 60.0, &marks);
    assert_eq!(filled, 15);

    let rendered: String = bar.into_iter().collect();
    insta::assert_snapshot!(rendered, @"╌╌╌╌╌╌╌╌╌──◆───⏺──────────────");
}

#[test]
fn validation_messages_snapshot() {
    let lesson = Lesson::parse_str(
        r#"{"skips": [{"start": 10, "end": 5}], "pauses": [{"time": -3, "text": "x"}]}"#,
    )
    .unwrap();

    let report = lesson.validate().join("\n");
    insta::assert_snapshot!(report, @r"
    skip #1: end 5 before start 10
    pause #1: negative time
    ");
}
