//! Activity record data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Wire format for record dates ("DD-MM-YYYY").
pub(crate) const DATE_FORMAT: &str = "%d-%m-%Y";

/// One row of call-center activity: a single business hour of a single day.
///
/// Records are not assumed sorted or calendar-complete; several rows (or
/// none) may exist for the same day. `presented = queued + bounced` by
/// construction upstream; the engine relies on that for percentage math but
/// does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Calendar date, "DD-MM-YYYY"
    pub date: String,
    /// Hour slot label, "H:00"; business hours 08-17 in valid input
    pub time: String,
    pub queued: u32,
    pub presented: u32,
    pub answered: u32,
    pub answered_within_60s: u32,
    pub abandoned: u32,
    /// Calls that overflowed to another queue; absent on older exports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounced: Option<u32>,
    /// Longest observed wait in the slot, "HH:MM:SS" ("00:00:00" = no event)
    pub longest_wait: String,
    pub longest_answer: String,
    pub longest_abandoned: String,
    /// Precomputed upstream per record; compared and averaged as-is
    pub percent_answered: u32,
}

impl ActivityRecord {
    /// Parse the record's calendar date.
    pub fn day(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| Error::MalformedDate {
            raw: self.date.clone(),
        })
    }

    /// Hour of day from the "H:00" slot label.
    pub fn hour(&self) -> Option<u32> {
        self.time.split(':').next()?.trim().parse().ok()
    }

    /// Bounced count with the missing wire field defaulted to zero.
    pub fn bounced_count(&self) -> u32 {
        self.bounced.unwrap_or(0)
    }
}
