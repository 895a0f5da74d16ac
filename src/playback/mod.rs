// Playback engine: owns a step sequence and the viewing position

use std::time::{Duration, Instant};

use crate::step::Step;

/// Default auto-play interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Replays a recorded step sequence under user control.
///
/// Two states: empty (no sequence loaded) and ready (sequence loaded,
/// position in `0..len`). Auto-play is a sub-mode of ready driven by
/// [`tick`](Self::tick) from the event loop; at most one "timer" exists
/// because the playing flag is the timer. Stepping past either end is a
/// defined no-op, not an error.
#[derive(Debug)]
pub struct Player {
    steps: Vec<Step>,
    position: usize,
    playing: bool,
    interval: Duration,
    last_advance: Instant,
}

impl Player {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Player {
            steps: Vec::new(),
            position: 0,
            playing: false,
            interval,
            last_advance: Instant::now(),
        }
    }

    /// Load a freshly recorded sequence. Replaces any existing sequence,
    /// resets the position to 0, and stops auto-play.
    pub fn load(&mut self, steps: Vec<Step>) {
        self.steps = steps;
        self.position = 0;
        self.playing = false;
    }

    /// Drop the sequence entirely. Idempotent.
    pub fn reset(&mut self) {
        self.steps.clear();
        self.position = 0;
        self.playing = false;
    }

    pub fn is_loaded(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.position)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    pub fn at_end(&self) -> bool {
        self.steps.is_empty() || self.position + 1 == self.steps.len()
    }

    /// Advance one step. Returns whether the position changed.
    pub fn step_forward(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Go back one step. Returns whether the position changed.
    pub fn step_backward(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Jump to an absolute position. Out-of-range targets are clamped to
    /// the last step. Returns whether the position changed.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        let clamped = target.min(self.steps.len() - 1);
        if clamped == self.position {
            return false;
        }
        self.position = clamped;
        true
    }

    pub fn jump_to_start(&mut self) -> bool {
        self.jump_to(0)
    }

    pub fn jump_to_end(&mut self) -> bool {
        if self.steps.is_empty() {
            false
        } else {
            self.jump_to(self.steps.len() - 1)
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start auto-play. A no-op while already playing (a second timer would
    /// cause skipped or out-of-order renders) and when nothing is loaded or
    /// the position is already at the end.
    pub fn play(&mut self) {
        if self.playing || !self.is_loaded() || self.at_end() {
            return;
        }
        self.playing = true;
        // Backdate so the first tick advances immediately.
        self.last_advance = Instant::now()
            .checked_sub(self.interval)
            .unwrap_or_else(Instant::now);
    }

    /// Stop auto-play. Idempotent; once this returns no tick advances.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Drive auto-play from the event loop. Advances at most one step per
    /// elapsed interval and self-stops upon reaching the last position.
    /// Returns whether the position changed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// [`tick`](Self::tick) with an explicit clock, so tests can drive the
    /// timer without sleeping.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }
        if now.duration_since(self.last_advance) < self.interval {
            return false;
        }
        self.last_advance = now;
        let moved = self.step_forward();
        if self.at_end() {
            self.playing = false;
        }
        moved
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
