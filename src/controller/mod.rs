// Range-bounded playback controller - owns the selected range and enforces
// its boundaries against a playing media source

use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::model::{InitialRange, RangeState};
use crate::domain::rules;

/// Controller lifecycle relative to its media source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    Ready,
    Detached,
}

/// Imperative intent emitted toward the media handle. The controller never
/// touches the handle directly; a session adapter applies these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaIntent {
    Seek(f64),
    Pause,
}

/// Owns `(start, end, current, duration)` and the invariants between them:
/// playback driven by the media's natural advance is never observed beyond
/// the selected end, and range adjustments pull playback rather than the
/// other way around.
///
/// Operations invoked before attach or after detach are no-ops, not errors -
/// UI teardown races are expected.
#[derive(Debug, Clone)]
pub struct RangeController {
    state: ControllerState,
    range: RangeState,
    seek_tolerance: f64,
    initial: Option<InitialRange>,
}

impl Default for RangeController {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeController {
    /// Create a controller with the default seek tolerance
    pub fn new() -> Self {
        Self::with_tolerance(rules::SEEK_TOLERANCE_SECS)
    }

    /// Create a controller with an explicit seek tolerance
    pub fn with_tolerance(seek_tolerance: f64) -> Self {
        Self {
            state: ControllerState::Uninitialized,
            range: RangeState::new(),
            seek_tolerance,
            initial: None,
        }
    }

    /// Apply a caller-supplied sub-range (e.g. a re-based saved clip) once
    /// the media reports its duration
    pub fn with_initial_range(mut self, initial: InitialRange) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Current lifecycle state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Current range snapshot
    pub fn range(&self) -> &RangeState {
        &self.range
    }

    /// Transition to Ready once the media source reports its duration.
    /// Initializes `end = duration` and `start = 0` unless an initial range
    /// was supplied, in which case its end is clamped to the duration.
    pub fn attach(&mut self, duration: f64) {
        if self.state != ControllerState::Uninitialized {
            return;
        }
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }

        self.range.duration = duration;
        match self.initial {
            Some(initial) if initial.start < duration => {
                self.range.start = initial.start;
                self.range.end = initial.end.min(duration);
            }
            _ => {
                self.range.start = 0.0;
                self.range.end = duration;
            }
        }
        self.range.current = self.range.start;
        self.state = ControllerState::Ready;
        debug!(
            duration,
            start = self.range.start,
            end = self.range.end,
            "controller attached"
        );
    }

    /// Move the start boundary. Pulls playback to the new start when the
    /// current position has drifted beyond the seek tolerance - a deliberate
    /// one-way sync; playback drifting never pushes the boundary.
    pub fn adjust_start(&mut self, new_start: f64) -> DomainResult<Option<MediaIntent>> {
        if self.state != ControllerState::Ready {
            return Ok(None);
        }
        if !rules::valid_start(new_start, self.range.end) {
            return Err(DomainError::InvalidRange {
                start: new_start,
                end: self.range.end,
            });
        }

        self.range.start = new_start;
        if rules::needs_seek(self.range.current, new_start, self.seek_tolerance) {
            // optimistic update; reconciled on the next time-update signal
            self.range.current = new_start;
            return Ok(Some(MediaIntent::Seek(new_start)));
        }
        Ok(None)
    }

    /// Move the end boundary. Never seeks by itself.
    pub fn adjust_end(&mut self, new_end: f64) -> DomainResult<()> {
        if self.state != ControllerState::Ready {
            return Ok(());
        }
        if !rules::valid_end(new_end, self.range.start, self.range.duration) {
            return Err(DomainError::InvalidRange {
                start: self.range.start,
                end: new_end,
            });
        }
        self.range.end = new_end;
        Ok(())
    }

    /// React to the media's periodic time-update signal. Crossing the
    /// selected end pauses playback and force-seeks back to exactly the end.
    pub fn on_time_update(&mut self, position: f64) -> Vec<MediaIntent> {
        if self.state != ControllerState::Ready || position.is_nan() {
            return Vec::new();
        }

        if position > self.range.end {
            self.range.current = self.range.end;
            debug!(position, end = self.range.end, "playback exited range");
            return vec![MediaIntent::Pause, MediaIntent::Seek(self.range.end)];
        }

        self.range.current = position;
        Vec::new()
    }

    /// The fixed-length library-save window starting at the selected start,
    /// clamped to the media duration. None unless attached.
    pub fn quick_save_window(&self) -> Option<(f64, f64)> {
        if self.state != ControllerState::Ready {
            return None;
        }
        Some(rules::quick_save_window(
            self.range.start,
            self.range.duration,
            rules::QUICK_SAVE_WINDOW_SECS,
        ))
    }

    /// Release the media binding. Terminal: further calls are no-ops.
    pub fn detach(&mut self) {
        if self.state == ControllerState::Detached {
            return;
        }
        self.state = ControllerState::Detached;
        debug!("controller detached");
    }
}
