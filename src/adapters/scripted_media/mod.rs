// Scripted media adapter - an in-memory media handle for tests and demos

use crate::ports::MediaHandle;

/// In-memory [`MediaHandle`] that records every transport call it receives.
/// Stands in for a real media element when exercising a session without a
/// playback backend.
#[derive(Debug, Default)]
pub struct ScriptedMediaHandle {
    duration: f64,
    position: f64,
    playing: bool,
    seeks: Vec<f64>,
    pauses: u32,
    plays: u32,
}

impl ScriptedMediaHandle {
    /// Create a handle that already knows its duration
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Create a handle whose metadata has not loaded yet
    pub fn pending_metadata() -> Self {
        Self::default()
    }

    /// Advance the scripted position without going through a seek
    pub fn advance_to(&mut self, position: f64) {
        self.position = position;
    }

    /// Every seek target received, in order
    pub fn seeks(&self) -> &[f64] {
        &self.seeks
    }

    /// Number of pause calls received
    pub fn pauses(&self) -> u32 {
        self.pauses
    }

    /// Number of play calls received
    pub fn plays(&self) -> u32 {
        self.plays
    }

    /// Whether the handle believes it is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl MediaHandle for ScriptedMediaHandle {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn play(&mut self) {
        self.playing = true;
        self.plays += 1;
    }

    fn pause(&mut self) {
        self.playing = false;
        self.pauses += 1;
    }

    fn seek(&mut self, position: f64) {
        self.position = position;
        self.seeks.push(position);
    }
}
