//! Time-frame filtering of activity records.
//!
//! Every downstream aggregate must be recomputed from the output of this
//! filter, never from the unfiltered set, or the summary cards and charts
//! stop agreeing with the visible window.

use chrono::{Datelike, Duration, NaiveDate};
use log::warn;

use crate::config::EngineConfig;
use crate::models::ActivityRecord;

/// Reporting window selecting a subset of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    /// Rolling window: the last `n` days up to and including `today`.
    LastDays(u32),
    /// Everything since January 1st of `today`'s year.
    CalendarYear,
    /// Explicit inclusive range; a missing bound disables filtering.
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl TimeFrame {
    /// The configured default rolling window.
    pub fn default_window(config: &EngineConfig) -> Self {
        TimeFrame::LastDays(config.window.default_days)
    }
}

/// Filtered subset plus the data-quality counter for dropped rows.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    pub records: Vec<ActivityRecord>,
    /// Records excluded because their date would not parse
    pub malformed_dates: usize,
}

/// Select the records falling inside `frame`.
///
/// `today` is passed explicitly so the engine stays a pure function of its
/// inputs; hosts hand in their clock at end-of-day granularity, which keeps
/// same-day records inside a rolling window.
pub fn filter_records(
    records: &[ActivityRecord],
    frame: &TimeFrame,
    today: NaiveDate,
) -> FilterOutcome {
    let (start, end) = match frame {
        TimeFrame::LastDays(n) => (today - Duration::days(*n as i64), today),
        TimeFrame::CalendarYear => {
            // Lower bound only: anything dated this year stays in
            let jan_first = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
            (jan_first, NaiveDate::MAX)
        }
        TimeFrame::Range { start, end } => {
            let (Some(start), Some(end)) = (start, end) else {
                // A half-open selection means "no filter yet": hand back the
                // input as-is rather than guessing a bound.
                return FilterOutcome {
                    records: records.to_vec(),
                    malformed_dates: 0,
                };
            };
            (*start, *end)
        }
    };

    let mut outcome = FilterOutcome::default();
    for record in records {
        match record.day() {
            Ok(day) => {
                if day >= start && day <= end {
                    outcome.records.push(record.clone());
                }
            }
            Err(err) => {
                warn!("dropping record from filtered view: {}", err);
                outcome.malformed_dates += 1;
            }
        }
    }
    outcome
}
