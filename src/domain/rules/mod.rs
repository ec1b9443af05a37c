// Domain rules - Selection policies shared by the clipping surfaces

use crate::domain::errors::DomainResult;
use crate::domain::model::{InitialRange, SavedClipRecord};
use crate::timefmt;

/// Seek tolerance in seconds. Range adjustments closer than this to the
/// current playback position do not issue a seek, avoiding seek storms from
/// floating-point jitter.
pub const SEEK_TOLERANCE_SECS: f64 = 0.3;

/// Fixed quick-save window length in seconds (3 minutes). Library saves are
/// bounded snippets regardless of the selected range, a product policy
/// distinct from the arbitrary-range export path.
pub const QUICK_SAVE_WINDOW_SECS: f64 = 180.0;

/// Compute the quick-save window starting at the selected start, clamped to
/// the media duration.
pub fn quick_save_window(start: f64, duration: f64, window_secs: f64) -> (f64, f64) {
    (start, (start + window_secs).min(duration))
}

/// Whether a proposed start boundary is acceptable against the current end
pub fn valid_start(new_start: f64, end: f64) -> bool {
    !new_start.is_nan() && new_start >= 0.0 && new_start < end
}

/// Whether a proposed end boundary is acceptable against the current start
/// and the media duration
pub fn valid_end(new_end: f64, start: f64, duration: f64) -> bool {
    !new_end.is_nan() && new_end > start && new_end <= duration
}

/// Whether adjusting toward `target` warrants a seek from `position`
pub fn needs_seek(position: f64, target: f64, tolerance: f64) -> bool {
    (position - target).abs() > tolerance
}

/// Re-base a saved clip's absolute boundaries to the zero point of the
/// re-fetched sub-segment: the backing media resource has already been
/// trimmed to the saved window, so re-editing starts at zero and ends at the
/// saved span. This prevents double-offsetting against the trimmed segment.
pub fn rebase_saved_range(record: &SavedClipRecord) -> DomainResult<InitialRange> {
    let saved_start = timefmt::clock_to_seconds(&record.start_time)?;
    let saved_end = timefmt::clock_to_seconds(&record.end_time)?;
    InitialRange::new(0.0, saved_end - saved_start)
}
