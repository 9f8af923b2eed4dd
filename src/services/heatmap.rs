//! Weekday-by-hour heatmap grouping with navigable week pages.
//!
//! The heatmap domain is restricted by design: business hours only, Monday
//! through Friday only. Weeks with no qualifying records are not
//! synthesized; navigation moves strictly between existing pages.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use log::warn;
use serde::Serialize;

use crate::config::BusinessHours;
use crate::models::record::DATE_FORMAT;
use crate::models::ActivityRecord;

/// One populated cell of the weekday-by-hour grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    /// Hour of day within business hours
    pub hour: u32,
    /// Monday = 0 .. Friday = 4
    pub weekday: u32,
    pub queued: u32,
    /// "DD-MM-YYYY" of the underlying record
    pub date: String,
    pub answered: u32,
}

/// All heatmap cells of one ISO week, Monday through Friday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekPage {
    /// ISO week number
    pub week: u32,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    /// "DD-MM-YYYY - DD-MM-YYYY" span shown by the week selector
    pub label: String,
    pub cells: Vec<HeatmapCell>,
}

/// Flat cell list plus the week pages it partitions into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeatmapData {
    pub cells: Vec<HeatmapCell>,
    pub weeks: Vec<WeekPage>,
}

impl HeatmapData {
    /// Clamp `index` to the valid page range (0 when there are no pages).
    pub fn clamp_page_index(&self, index: usize) -> usize {
        if self.weeks.is_empty() {
            0
        } else {
            index.min(self.weeks.len() - 1)
        }
    }

    /// Index of the page after `current`, clamped at the last page.
    pub fn next_page_index(&self, current: usize) -> usize {
        self.clamp_page_index(current.saturating_add(1))
    }

    /// Index of the page before `current`, clamped at the first page.
    pub fn prev_page_index(&self, current: usize) -> usize {
        self.clamp_page_index(current.saturating_sub(1))
    }
}

/// Group records into the weekday-by-hour grid and its week pages.
pub fn compute_heatmap(records: &[ActivityRecord], hours: BusinessHours) -> HeatmapData {
    // Keyed by (iso_year, iso_week) so a December week and a January week
    // of the turn of the year never merge; BTreeMap keeps pages
    // chronological.
    let mut pages: BTreeMap<(i32, u32), WeekPage> = BTreeMap::new();
    let mut cells = Vec::new();

    for record in records {
        let day = match record.day() {
            Ok(day) => day,
            Err(err) => {
                warn!("skipping record in heatmap grouping: {}", err);
                continue;
            }
        };
        let weekday = day.weekday().num_days_from_monday();
        if weekday >= 5 {
            continue;
        }
        let hour = match record.hour() {
            Some(hour) => hour,
            None => {
                warn!("skipping record with unreadable slot label {:?}", record.time);
                continue;
            }
        };
        if !hours.contains(hour) {
            continue;
        }

        let cell = HeatmapCell {
            hour,
            weekday,
            queued: record.queued,
            date: record.date.clone(),
            answered: record.answered,
        };

        let iso = day.iso_week();
        let monday = day - Duration::days(i64::from(weekday));
        let friday = monday + Duration::days(4);
        let page = pages.entry((iso.year(), iso.week())).or_insert_with(|| WeekPage {
            week: iso.week(),
            first_date: monday,
            last_date: friday,
            label: format!(
                "{} - {}",
                monday.format(DATE_FORMAT),
                friday.format(DATE_FORMAT)
            ),
            cells: Vec::new(),
        });
        page.cells.push(cell.clone());
        cells.push(cell);
    }

    HeatmapData {
        cells,
        weeks: pages.into_values().collect(),
    }
}
