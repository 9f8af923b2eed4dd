//! Calendar-complete activity series.
//!
//! Buckets a record subset into a contiguous, gap-filled sequence of
//! calendar units. The critical property: a unit with no events still
//! appears as a zero-valued point, or trend lines silently lie.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::ActivityRecord;

/// Bucket granularity for an activity series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Monthly,
    Yearly,
}

/// One calendar unit in a gap-filled activity series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesBucket {
    /// Canonical label: "DD-MM" daily, "YYYY-M" monthly, "YYYY" yearly,
    /// weekday name in the weekday summary
    pub label: String,
    pub answered: u32,
    pub abandoned: u32,
    pub bounced: u32,
    /// abandoned + bounced
    pub not_answered: u32,
}

impl SeriesBucket {
    fn zeroed(label: String) -> Self {
        Self {
            label,
            answered: 0,
            abandoned: 0,
            bounced: 0,
            not_answered: 0,
        }
    }

    fn absorb(&mut self, record: &ActivityRecord) {
        self.answered += record.answered;
        self.abandoned += record.abandoned;
        self.bounced += record.bounced_count();
        self.not_answered = self.abandoned + self.bounced;
    }
}

/// Calendar key: (year, month, day) with unused positions zeroed, so monthly
/// buckets in multi-year ranges never collide across years.
type CalendarKey = (i32, u32, u32);

fn key_of(day: NaiveDate, granularity: Granularity) -> CalendarKey {
    match granularity {
        Granularity::Daily => (day.year(), day.month(), day.day()),
        Granularity::Monthly => (day.year(), day.month(), 0),
        Granularity::Yearly => (day.year(), 0, 0),
    }
}

/// Enumerate every calendar unit from `min` to `max` inclusive, in
/// chronological order, with its canonical label.
fn enumerate_units(
    min: NaiveDate,
    max: NaiveDate,
    granularity: Granularity,
) -> Vec<(CalendarKey, String)> {
    match granularity {
        Granularity::Daily => min
            .iter_days()
            .take_while(|day| *day <= max)
            .map(|day| {
                (
                    key_of(day, granularity),
                    format!("{:02}-{:02}", day.day(), day.month()),
                )
            })
            .collect(),
        Granularity::Monthly => {
            let mut units = Vec::new();
            let (mut year, mut month) = (min.year(), min.month());
            loop {
                units.push(((year, month, 0), format!("{}-{}", year, month)));
                if (year, month) == (max.year(), max.month()) {
                    break;
                }
                month += 1;
                if month > 12 {
                    month = 1;
                    year += 1;
                }
            }
            units
        }
        Granularity::Yearly => (min.year()..=max.year())
            .map(|year| ((year, 0, 0), year.to_string()))
            .collect(),
    }
}

/// Bucket `records` into a gap-filled series spanning the min..=max dates
/// actually present in the input. Empty input yields an empty series.
pub fn compute_series(records: &[ActivityRecord], granularity: Granularity) -> Vec<SeriesBucket> {
    let mut dated = Vec::with_capacity(records.len());
    for record in records {
        match record.day() {
            Ok(day) => dated.push((day, record)),
            Err(err) => warn!("skipping record in series bucketing: {}", err),
        }
    }
    if dated.is_empty() {
        return Vec::new();
    }

    let mut min = dated[0].0;
    let mut max = dated[0].0;
    for (day, _) in &dated {
        if *day < min {
            min = *day;
        }
        if *day > max {
            max = *day;
        }
    }

    // Zero-initialized buckets in enumeration (chronological) order; the
    // key->index map folds records in without disturbing that order.
    let units = enumerate_units(min, max, granularity);
    let mut index = HashMap::with_capacity(units.len());
    let mut buckets = Vec::with_capacity(units.len());
    for (i, (key, label)) in units.into_iter().enumerate() {
        index.insert(key, i);
        buckets.push(SeriesBucket::zeroed(label));
    }

    for (day, record) in dated {
        if let Some(&i) = index.get(&key_of(day, granularity)) {
            buckets[i].absorb(record);
        }
    }

    buckets
}

/// Weekday names in Monday-first order, the labels of the weekday summary.
pub const WEEKDAY_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Accumulate records into five fixed weekday buckets, Monday through
/// Friday. Weekend rows stay out of the weekday view.
pub fn compute_weekday_summary(records: &[ActivityRecord]) -> Vec<SeriesBucket> {
    let mut buckets: Vec<SeriesBucket> = WEEKDAY_NAMES
        .iter()
        .map(|name| SeriesBucket::zeroed(name.to_string()))
        .collect();

    for record in records {
        let day = match record.day() {
            Ok(day) => day,
            Err(err) => {
                warn!("skipping record in weekday summary: {}", err);
                continue;
            }
        };
        let weekday = day.weekday().num_days_from_monday() as usize;
        if weekday >= buckets.len() {
            continue;
        }
        buckets[weekday].absorb(record);
    }

    buckets
}
