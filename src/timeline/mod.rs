//! Media timeline engine
//!
//! The pieces the player controller drives:
//! - `transport`: the `Transport` trait (play/pause/seek/position) and the
//!   wall-clock implementation backing interactive playback
//! - `cues`: timed-cue registration and firing (action cues that can be
//!   suspended, caption cues that are queried for display)
//! - `populate`: wiring a parsed `Lesson` into cues, done once before playback

mod cues;
mod populate;
mod transport;

pub use cues::{CaptionCue, CueAction, CueSheet, Pane};
pub use populate::{populate, PAUSE_LEAD, SKIP_MARGIN, SKIP_MARKER};
pub use transport::{ClockTransport, Transport};
