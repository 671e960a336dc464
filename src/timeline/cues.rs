//! Timed cues fired against the playhead.
//!
//! Two channels exist. Action cues drive the transport (skip jumps, automatic
//! pauses) and can be suspended as a group while the user is navigating or
//! playback is paused. Caption cues are passive: the renderer queries which
//! are active at the current position and displays their text.

use tracing::debug;

/// Display target for a caption cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Subtitle pane at the bottom of the screen region
    Subtitles,
    /// Overlay pane at the top of the screen region
    Overlay,
}

/// Text displayed while the playhead is inside `[start, end)`.
#[derive(Debug, Clone)]
pub struct CaptionCue {
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub pane: Pane,
}

/// Transport-driving effect of an action cue.
#[derive(Debug, Clone, PartialEq)]
pub enum CueAction {
    /// Move the playhead to the given time (skip annotations)
    JumpTo(f64),
    /// Pause playback and show the text in the pause panel
    PauseWithText(String),
}

/// An action cue with its firing range and arming state.
#[derive(Debug)]
struct ActionCue {
    start: f64,
    end: f64,
    action: CueAction,
    /// True once fired for the current range entry; re-arms when the playhead
    /// leaves the range, so a cue fires once per approach.
    fired: bool,
}

/// Registered cues for one lesson.
///
/// Registration happens once before playback; there is no removal. The action
/// channel starts disabled and is enabled when playback starts.
#[derive(Debug, Default)]
pub struct CueSheet {
    actions: Vec<ActionCue>,
    captions: Vec<CaptionCue>,
    actions_enabled: bool,
}

impl CueSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action cue firing when the playhead enters `[start, end]`.
    pub fn register_action(&mut self, start: f64, end: f64, action: CueAction) {
        self.actions.push(ActionCue {
            start,
            end,
            action,
            fired: false,
        });
    }

    /// Register a caption shown while the playhead is inside `[start, end)`.
    pub fn register_caption(&mut self, pane: Pane, start: f64, end: f64, text: impl Into<String>) {
        self.captions.push(CaptionCue {
            start,
            end,
            text: text.into(),
            pane,
        });
    }

    /// Enable the action channel.
    pub fn enable_actions(&mut self) {
        if !self.actions_enabled {
            self.actions_enabled = true;
            debug!("action cues enabled");
        }
    }

    /// Suspend the action channel. Caption cues are unaffected.
    pub fn disable_actions(&mut self) {
        if self.actions_enabled {
            self.actions_enabled = false;
            debug!("action cues disabled");
        }
    }

    pub fn actions_enabled(&self) -> bool {
        self.actions_enabled
    }

    /// Advance to the given playhead position, returning actions to apply.
    ///
    /// A cue fires when the playhead sits inside its range, the channel is
    /// enabled, and it has not fired since the playhead last entered the
    /// range. Leaving the range re-arms it, so seeking back into a skip
    /// region triggers the skip again.
    pub fn tick(&mut self, now: f64) -> Vec<CueAction> {
        let mut fired = Vec::new();
        for cue in &mut self.actions {
            let inside = now >= cue.start && now <= cue.end;
            if !inside {
                cue.fired = false;
                continue;
            }
            if self.actions_enabled && !cue.fired {
                cue.fired = true;
                debug!(start = cue.start, end = cue.end, action = ?cue.action, "action cue fired");
                fired.push(cue.action.clone());
            }
        }
        fired
    }

    /// Captions active on the given pane at the given position, in
    /// registration order.
    pub fn active_captions(&self, pane: Pane, now: f64) -> Vec<&CaptionCue> {
        self.captions
            .iter()
            .filter(|c| c.pane == pane && now >= c.start && now < c.end)
            .collect()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn caption_count(&self) -> usize {
        self.captions.len()
    }
}
