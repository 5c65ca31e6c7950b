use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

// @module: SRT timecode encoding and decoding

// All internal time arithmetic uses integer milliseconds. Keeping a fixed
// millisecond denominator means repeated shifts never accumulate rounding
// error the way binary floating point would.

// @const: Strict SRT timecode pattern (hours may exceed two digits)
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2,}):([0-5]\d):([0-5]\d),(\d{3})$").unwrap()
});

// @const: Signed decimal seconds, e.g. "-1.5", "+12", "0.250"
static SECONDS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(\d+)(?:\.(\d*))?$").unwrap()
});

/// Parse a strict `HH:MM:SS,mmm` timecode into total milliseconds.
///
/// Hours must be at least two digits with no upper bound, minutes and
/// seconds must be in 00-59, milliseconds exactly three digits. Anything
/// else is rejected as [`SubtitleError::MalformedTimecode`].
pub fn parse_timestamp(timecode: &str) -> Result<i64, SubtitleError> {
    let caps = TIMECODE_REGEX
        .captures(timecode)
        .ok_or_else(|| SubtitleError::MalformedTimecode {
            timecode: timecode.to_string(),
        })?;

    // The regex guarantees each group is a bounded run of ASCII digits,
    // except hours which can overflow on absurd input
    let component = |idx: usize| -> Result<i64, SubtitleError> {
        caps.get(idx)
            .map(|m| m.as_str())
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| SubtitleError::MalformedTimecode {
                timecode: timecode.to_string(),
            })
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;
    let millis = component(4)?;

    // Hours are unbounded by the pattern, so the arithmetic must be checked
    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .and_then(|total| total.checked_mul(1000))
        .and_then(|total| total.checked_add(millis))
        .ok_or_else(|| SubtitleError::MalformedTimecode {
            timecode: timecode.to_string(),
        })
}

/// Format total milliseconds as an SRT timecode `HH:MM:SS,mmm`.
///
/// Hours are zero-padded to at least two digits and grow without bound.
/// Negative durations have no SRT representation; they are rejected with
/// [`SubtitleError::NegativeDuration`] so a large negative shift fails
/// loudly instead of writing undefined text.
pub fn format_timestamp(ms: i64) -> Result<String, SubtitleError> {
    if ms < 0 {
        return Err(SubtitleError::NegativeDuration { ms });
    }

    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    Ok(format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis))
}

/// Parse a signed decimal seconds string (e.g. `-1.5`) into milliseconds.
///
/// The fractional part is read digit-by-digit and truncated after the
/// third place, so the value never passes through a binary float and
/// sub-millisecond digits are dropped rather than rounded.
pub fn parse_seconds(text: &str) -> Result<i64, SubtitleError> {
    let trimmed = text.trim();
    let caps = SECONDS_REGEX
        .captures(trimmed)
        .ok_or_else(|| SubtitleError::MalformedTimecode {
            timecode: trimmed.to_string(),
        })?;

    let negative = caps.get(1).map(|m| m.as_str()) == Some("-");

    let whole: i64 = caps
        .get(2)
        .map(|m| m.as_str())
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| SubtitleError::MalformedTimecode {
            timecode: trimmed.to_string(),
        })?;

    // Pad or truncate the fraction to exactly three digits
    let mut fraction_ms: i64 = 0;
    if let Some(fraction) = caps.get(3) {
        let digits: String = fraction.as_str().chars().take(3).collect();
        if !digits.is_empty() {
            let padded = format!("{:0<3}", digits);
            fraction_ms = padded.parse().map_err(|_| SubtitleError::MalformedTimecode {
                timecode: trimmed.to_string(),
            })?;
        }
    }

    let magnitude = whole
        .checked_mul(1000)
        .and_then(|ms| ms.checked_add(fraction_ms))
        .ok_or_else(|| SubtitleError::MalformedTimecode {
            timecode: trimmed.to_string(),
        })?;
    Ok(if negative { -magnitude } else { magnitude })
}
