//! Fixed-width "HH:MM:SS" duration codec.
//!
//! Wait/answer/abandon high-water marks travel as zero-padded strings.
//! "00:00:00" is a sentinel meaning "no event in this slot", not a
//! zero-length event; callers must check [`is_no_event`] before feeding a
//! value into averaging logic.

use crate::error::{Error, Result};

/// Sentinel meaning "no event observed in this slot".
pub const NO_EVENT: &str = "00:00:00";

/// True when `raw` is the "no event" sentinel.
pub fn is_no_event(raw: &str) -> bool {
    raw == NO_EVENT
}

/// Parse a "HH:MM:SS" string into total seconds.
///
/// Requires exactly three colon-separated integer fields; anything else is
/// [`Error::MalformedDuration`].
pub fn seconds_of(raw: &str) -> Result<u32> {
    let malformed = || Error::MalformedDuration {
        raw: raw.to_string(),
    };

    let mut fields = [0u32; 3];
    let mut count = 0;
    for part in raw.split(':') {
        if count == fields.len() {
            return Err(malformed());
        }
        fields[count] = part.parse::<u32>().map_err(|_| malformed())?;
        count += 1;
    }
    if count != fields.len() {
        return Err(malformed());
    }

    Ok(fields[0] * 3600 + fields[1] * 60 + fields[2])
}

/// Encode total seconds back into a zero-padded "HH:MM:SS" string.
///
/// The hour field is truncated to two digits to keep the encoding
/// fixed-width; observed high-water marks never approach the 100-hour mark.
pub fn duration_of(seconds: u32) -> String {
    let hours = (seconds / 3600) % 100;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
