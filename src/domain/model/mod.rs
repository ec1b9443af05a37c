// Domain models - Range state, media identity, export and library records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::timefmt;

/// The central entity: the user-selected sub-range of an attached media
/// source, plus the last observed playback position. All fields are seconds.
///
/// `duration` is 0.0 until the media source reports its metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeState {
    pub duration: f64,
    pub start: f64,
    pub end: f64,
    pub current: f64,
}

impl RangeState {
    /// Create an empty range state awaiting media metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the selected range in seconds
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// A caller-supplied pre-selected sub-range applied when the controller
/// attaches to a media source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialRange {
    pub start: f64,
    pub end: f64,
}

impl InitialRange {
    /// Create an initial range, validating ordering
    pub fn new(start: f64, end: f64) -> DomainResult<Self> {
        if start.is_nan() || end.is_nan() || start < 0.0 || start >= end {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }
}

/// Identity of the media source an export request targets
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaIdentity {
    pub source: String,
    pub title: Option<String>,
    pub user_id: Option<String>,
}

impl MediaIdentity {
    /// Create a media identity from a source identifier (filename or URL)
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: None,
            user_id: None,
        }
    }

    /// Attach a human-readable title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach the owning user
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// A validated, wire-ready clip export request. Both boundaries are
/// HH:MM:SS clock strings; the start always strictly precedes the end when
/// parsed back to seconds.
///
/// Valid input to both variants of the extraction service: the synchronous
/// clip download and the queued project creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub source: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Processing status of a saved clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipStatus {
    Processing,
    Completed,
    Failed,
}

/// A committed clip owned by the persistence collaborator. The core reads
/// these only to re-base a previously saved range for re-editing, and writes
/// them only as fully-built records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedClipRecord {
    pub clip_filename: String,
    pub clip_path: String,
    pub vod_title: String,
    pub start_time: String,
    pub end_time: String,
    pub clip_duration_seconds: f64,
    pub processing_date: DateTime<Utc>,
    pub status: ClipStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub file_size_bytes: u64,
}

impl SavedClipRecord {
    /// Build a completed library record for a saved window of the given
    /// source. Boundaries are serialized through the time format codec.
    pub fn completed(
        source: &str,
        title: Option<&str>,
        user_id: String,
        save_start: f64,
        save_end: f64,
    ) -> Self {
        Self {
            clip_filename: format!("{}_cropped.mp4", source),
            clip_path: format!("clips/{}", source),
            vod_title: title.unwrap_or(source).to_string(),
            start_time: timefmt::seconds_to_clock(save_start),
            end_time: timefmt::seconds_to_clock(save_end),
            clip_duration_seconds: save_end - save_start,
            processing_date: Utc::now(),
            status: ClipStatus::Completed,
            user_id: Some(user_id),
            file_size_bytes: 0,
        }
    }
}
