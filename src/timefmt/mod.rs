//! Time format codec - conversions between seconds, HH:MM:SS clock strings,
//! and compact Twitch-style duration strings (e.g. "4h34m47s")

use crate::domain::errors::{DomainError, DomainResult};

/// Format seconds as a zero-padded HH:MM:SS clock string.
///
/// Each field is floored. Negative or non-finite input clamps to "00:00:00".
pub fn seconds_to_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Parse an HH:MM:SS clock string into seconds.
///
/// Exactly three colon-separated integer components are required.
pub fn clock_to_seconds(clock: &str) -> DomainResult<f64> {
    let trimmed = clock.trim();
    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() != 3 {
        return Err(DomainError::MalformedTimestamp {
            value: clock.to_string(),
        });
    }

    let mut fields = [0u64; 3];
    for (i, part) in parts.iter().enumerate() {
        fields[i] = part
            .parse::<u64>()
            .map_err(|_| DomainError::MalformedTimestamp {
                value: clock.to_string(),
            })?;
    }

    Ok((fields[0] * 3600 + fields[1] * 60 + fields[2]) as f64)
}

/// Parse a compact Twitch duration string ("4h34m47s", "45m", "2h") into
/// seconds.
///
/// All three groups are optional and must appear in hours/minutes/seconds
/// order. An input with no matching group at all yields 0.0 - upstream VOD
/// metadata is not always complete, so an empty duration is valid, not an
/// error.
pub fn twitch_duration_to_seconds(duration: &str) -> f64 {
    let mut rest = duration.trim();
    let mut total: u64 = 0;

    for (unit, scale) in [('h', 3600), ('m', 60), ('s', 1)] {
        if let Some((value, remainder)) = take_component(rest, unit) {
            total += value * scale;
            rest = remainder;
        }
    }

    total as f64
}

/// Take one leading "<digits><unit>" group off the input, if present.
fn take_component(input: &str, unit: char) -> Option<(u64, &str)> {
    let digits_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if digits_end == 0 {
        return None;
    }
    let after_digits = &input[digits_end..];
    if !after_digits.starts_with(unit) {
        return None;
    }
    let value = input[..digits_end].parse().ok()?;
    Some((value, &after_digits[unit.len_utf8()..]))
}
