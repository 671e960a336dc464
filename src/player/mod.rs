//! Interactive lesson player
//!
//! Binds terminal input to transport control and mirrors playback position
//! into the rendered chrome, while the cue sheet drives annotation behavior.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlayerState struct and shared types (InputResult)
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: UI rendering (screen panes, progress bar, status bar, help)
//! - `session`: The playback loop owning the terminal
//!
//! # Usage
//!
//! ```no_run
//! use vlp::config::Config;
//! use vlp::lesson::Lesson;
//! use vlp::player::{play_lesson, PlaybackResult};
//!
//! let lesson = Lesson::demo();
//! let result = play_lesson(&lesson, "demo", &Config::default()).unwrap();
//! match result {
//!     PlaybackResult::Finished => println!("Lesson finished"),
//!     PlaybackResult::Interrupted => println!("Stopped by user"),
//! }
//! ```

pub(crate) mod input;
pub mod render;
mod session;
pub mod state;

pub use session::{play_lesson, PlaybackResult};
pub use state::{InputResult, PlayerState};
