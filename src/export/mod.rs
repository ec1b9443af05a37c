// Export request builder - validated hand-off toward the clip extraction
// service

use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::model::{ExportRequest, MediaIdentity, RangeState};
use crate::timefmt;

/// Builds well-formed [`ExportRequest`] values from a range and a media
/// identity. Pure construction: the network call and any download trigger
/// stay with the caller.
pub struct ExportRequestBuilder;

impl ExportRequestBuilder {
    /// Validate the range and identity and serialize the boundaries.
    pub fn build(range: &RangeState, identity: &MediaIdentity) -> DomainResult<ExportRequest> {
        if range.start.is_nan() || range.end.is_nan() || range.start >= range.end {
            return Err(DomainError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        if identity.source.trim().is_empty() {
            return Err(DomainError::MissingIdentity);
        }

        let start_time = timefmt::seconds_to_clock(range.start);
        let end_time = timefmt::seconds_to_clock(range.end);
        // whole-second serialization can collapse a sub-second range; the
        // timestamps must still be strictly ordered after parsing back
        if start_time == end_time {
            return Err(DomainError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }

        debug!(source = %identity.source, %start_time, %end_time, "export request built");
        Ok(ExportRequest {
            source: identity.source.clone(),
            start_time,
            end_time,
            title: identity.title.clone(),
            user_id: identity.user_id.clone(),
        })
    }
}
