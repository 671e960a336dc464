//! Playback transport: the clock that owns the playhead.
//!
//! The controller never stores the playback position itself; it reads it from
//! the transport and requests changes. Seeks on a non-seekable transport are
//! no-ops, matching the best-effort contract of the player controls.

use std::time::Instant;

use tracing::debug;

/// Interface the player controller drives.
///
/// Mirrors the media-timeline surface the controller needs: transport control,
/// position, and feature detection for seekability.
pub trait Transport {
    /// Start or resume playback.
    fn play(&mut self);
    /// Pause playback, freezing the playhead.
    fn pause(&mut self);
    /// Whether playback is currently paused.
    fn paused(&self) -> bool;
    /// Current playhead position in seconds.
    fn current_time(&self) -> f64;
    /// Playhead position rounded to whole seconds, for time labels.
    fn round_time(&self) -> u64 {
        self.current_time().round().max(0.0) as u64
    }
    /// Request a playhead move. No-op when the transport is not seekable.
    fn seek(&mut self, time: f64);
    /// Total duration in seconds, when known.
    fn duration(&self) -> Option<f64>;
    /// Whether the transport exposes a seekable range.
    fn is_seekable(&self) -> bool;
    /// Whether the playhead has reached the end of known media.
    fn ended(&self) -> bool {
        self.duration()
            .is_some_and(|total| self.current_time() >= total)
    }
}

/// Wall-clock transport.
///
/// While playing, the playhead is `time_offset` plus elapsed wall time since
/// `started_at`; while paused it is `time_offset` alone. Seeking rewrites the
/// offset and restarts the elapsed measurement. A duration is required for a
/// seekable range: without one there is nothing to clamp against.
#[derive(Debug)]
pub struct ClockTransport {
    paused: bool,
    started_at: Instant,
    time_offset: f64,
    duration: Option<f64>,
}

impl ClockTransport {
    /// Create a paused transport, playhead at zero.
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            paused: true,
            started_at: Instant::now(),
            time_offset: 0.0,
            duration,
        }
    }

    fn clamp(&self, time: f64) -> f64 {
        match self.duration {
            Some(total) => time.clamp(0.0, total),
            None => time.max(0.0),
        }
    }
}

impl Transport for ClockTransport {
    fn play(&mut self) {
        if self.paused {
            self.started_at = Instant::now();
            self.paused = false;
            debug!(at = self.time_offset, "transport play");
        }
    }

    fn pause(&mut self) {
        if !self.paused {
            self.time_offset = self.current_time();
            self.paused = true;
            debug!(at = self.time_offset, "transport pause");
        }
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        if self.paused {
            self.time_offset
        } else {
            self.clamp(self.time_offset + self.started_at.elapsed().as_secs_f64())
        }
    }

    fn seek(&mut self, time: f64) {
        if !self.is_seekable() {
            debug!(requested = time, "seek ignored: not seekable");
            return;
        }
        self.time_offset = self.clamp(time);
        self.started_at = Instant::now();
        debug!(at = self.time_offset, "transport seek");
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn is_seekable(&self) -> bool {
        self.duration.is_some()
    }
}
