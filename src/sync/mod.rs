// Media session - binds one controller to one media handle, applying
// controller intents and translating media signals into transitions

use tracing::debug;

use crate::config::SessionConfig;
use crate::controller::{MediaIntent, RangeController};
use crate::domain::errors::DomainResult;
use crate::domain::model::{InitialRange, RangeState};
use crate::ports::{MediaEvent, MediaHandle};

/// Thin adapter between a [`RangeController`] and a concrete media handle.
///
/// The handle is exclusively owned: attaching a new source first detaches the
/// old binding, and events arriving after detach are dropped so a torn-down
/// view is never updated.
pub struct MediaSession<H: MediaHandle> {
    controller: RangeController,
    handle: Option<H>,
    config: SessionConfig,
}

impl<H: MediaHandle> MediaSession<H> {
    /// Create an empty session with the given configuration
    pub fn new(config: SessionConfig) -> Self {
        Self {
            controller: RangeController::with_tolerance(config.seek_tolerance_secs),
            handle: None,
            config,
        }
    }

    /// Bind a media handle, optionally with a pre-selected sub-range (e.g. a
    /// re-based saved clip). Replaces and detaches any previous binding.
    pub fn attach(&mut self, handle: H, initial: Option<InitialRange>) {
        if self.handle.is_some() {
            self.detach();
        }

        let mut controller = RangeController::with_tolerance(self.config.seek_tolerance_secs);
        if let Some(initial) = initial {
            controller = controller.with_initial_range(initial);
        }
        self.controller = controller;

        // sources probed ahead of time already know their duration
        let duration = handle.duration();
        self.handle = Some(handle);
        if duration > 0.0 {
            self.controller.attach(duration);
        }
    }

    /// Whether a media handle is currently bound
    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Controller state snapshot
    pub fn range(&self) -> &RangeState {
        self.controller.range()
    }

    /// The owned controller
    pub fn controller(&self) -> &RangeController {
        &self.controller
    }

    /// Feed a media signal into the session
    pub fn handle_event(&mut self, event: MediaEvent) {
        if self.handle.is_none() {
            // stale signal from an unsubscribed source
            return;
        }
        match event {
            MediaEvent::MetadataLoaded { duration } => self.controller.attach(duration),
            MediaEvent::TimeUpdate { position } => {
                let intents = self.controller.on_time_update(position);
                self.apply(intents);
            }
            MediaEvent::Ended => {
                let position = self
                    .handle
                    .as_ref()
                    .map(|h| h.position())
                    .unwrap_or_default();
                let intents = self.controller.on_time_update(position);
                self.apply(intents);
            }
        }
    }

    /// Move the start boundary, seeking the media when warranted
    pub fn adjust_start(&mut self, new_start: f64) -> DomainResult<()> {
        let intent = self.controller.adjust_start(new_start)?;
        self.apply(intent.into_iter().collect());
        Ok(())
    }

    /// Move the end boundary
    pub fn adjust_end(&mut self, new_end: f64) -> DomainResult<()> {
        self.controller.adjust_end(new_end)
    }

    /// Start playback on the bound handle
    pub fn play(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            handle.play();
        }
    }

    /// Pause playback on the bound handle
    pub fn pause(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            handle.pause();
        }
    }

    /// Release the media binding and drop all further signals
    pub fn detach(&mut self) {
        self.controller.detach();
        if self.handle.take().is_some() {
            debug!("media session detached");
        }
    }

    /// Apply controller intents to the handle. Only the final seek of a
    /// batch reaches the media - latest wins, contradictory seeks never
    /// queue up.
    fn apply(&mut self, intents: Vec<MediaIntent>) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };

        let mut seek_target = None;
        for intent in intents {
            match intent {
                MediaIntent::Pause => handle.pause(),
                MediaIntent::Seek(target) => seek_target = Some(target),
            }
        }
        if let Some(target) = seek_target {
            handle.seek(target);
        }
    }
}

#[cfg(test)]
mod tests;
