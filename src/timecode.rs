/*!
 * SRT timecode codec.
 *
 * Converts between the `HH:MM:SS,mmm` wire form and a millisecond count:
 * - Parsing is strict: exactly one comma, three millisecond digits, and
 *   minute/second fields below 60
 * - Formatting is lossless for any millisecond value; the hour field grows
 *   past two digits when needed
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

/// Anchored pattern for a single SRT timecode
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2,}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

/// Parse an SRT timecode to milliseconds
pub fn parse_timecode(text: &str) -> Result<u64, SubtitleError> {
    let caps = TIMECODE_REGEX
        .captures(text)
        .ok_or_else(|| SubtitleError::MalformedTimestamp(text.to_string()))?;

    let hours: u64 = caps[1]
        .parse()
        .map_err(|_| SubtitleError::MalformedTimestamp(text.to_string()))?;
    let minutes: u64 = caps[2]
        .parse()
        .map_err(|_| SubtitleError::MalformedTimestamp(text.to_string()))?;
    let seconds: u64 = caps[3]
        .parse()
        .map_err(|_| SubtitleError::MalformedTimestamp(text.to_string()))?;
    let millis: u64 = caps[4]
        .parse()
        .map_err(|_| SubtitleError::MalformedTimestamp(text.to_string()))?;

    // The regex already caps millis at three digits
    if minutes >= 60 || seconds >= 60 {
        return Err(SubtitleError::MalformedTimestamp(text.to_string()));
    }

    Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
}

/// Format a millisecond count as an SRT timecode (HH:MM:SS,mmm)
pub fn format_timecode(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}
