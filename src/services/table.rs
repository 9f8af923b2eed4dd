//! Sortable, searchable, paginated table projection.
//!
//! Filtering, comparison and pagination are reapplied from scratch on every
//! call; nothing here caches across filter states.

use std::cmp::Ordering;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::record::DATE_FORMAT;
use crate::models::ActivityRecord;

/// Table column a query can sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Date,
    Time,
    Queued,
    Presented,
    Answered,
    AnsweredWithin60s,
    Abandoned,
    LongestWait,
    LongestAnswer,
    LongestAbandoned,
    PercentAnswered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    #[default]
    Ascending,
    Descending,
}

/// Filter, sort and pagination parameters for one table view.
///
/// `period_days` and `month`/`year` are independent optional predicates,
/// ANDed when both happen to be set; keeping them mutually exclusive is the
/// caller's concern.
#[derive(Debug, Clone, Default)]
pub struct TableQuery {
    /// Rolling-window predicate, in days back from `today`
    pub period_days: Option<u32>,
    /// Calendar month predicate, 1-12
    pub month: Option<u32>,
    /// Calendar year predicate
    pub year: Option<i32>,
    /// Case-insensitive substring over date, time and numeric fields
    pub search: Option<String>,
    pub sort_field: Option<SortField>,
    pub sort_dir: SortDir,
    /// 1-indexed page number
    pub page: usize,
    pub page_size: usize,
}

impl TableQuery {
    /// An unfiltered first page at the configured page size.
    pub fn first_page(config: &EngineConfig) -> Self {
        Self {
            page: 1,
            page_size: config.table.page_size,
            ..Self::default()
        }
    }
}

/// One page of the filtered, sorted table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePage {
    pub rows: Vec<ActivityRecord>,
    /// Matching rows across all pages; unaffected by the page number
    pub total_matching: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Run `params` against `records` and return the requested page.
///
/// A page past the end yields empty `rows`, never an error.
pub fn query_table(
    records: &[ActivityRecord],
    params: &TableQuery,
    today: NaiveDate,
) -> TablePage {
    let mut matching: Vec<&ActivityRecord> = records
        .iter()
        .filter(|record| matches_period(record, params, today))
        .filter(|record| matches_month_year(record, params))
        .filter(|record| matches_search(record, params))
        .collect();

    if let Some(field) = params.sort_field {
        // sort_by is stable, and reversing the comparator keeps ties Equal,
        // so descending order preserves prior relative order too.
        matching.sort_by(|a, b| {
            let ordering = compare_by(a, b, field);
            match params.sort_dir {
                SortDir::Ascending => ordering,
                SortDir::Descending => ordering.reverse(),
            }
        });
    }

    let total_matching = matching.len();
    let page_size = params.page_size.max(1);
    let total_pages = total_matching.div_ceil(page_size);
    let page = params.page.max(1);
    let rows = matching
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    TablePage {
        rows,
        total_matching,
        page,
        page_size,
        total_pages,
    }
}

fn matches_period(record: &ActivityRecord, params: &TableQuery, today: NaiveDate) -> bool {
    let Some(days) = params.period_days else {
        return true;
    };
    match record.day() {
        Ok(day) => day >= today - Duration::days(i64::from(days)) && day <= today,
        Err(_) => false,
    }
}

fn matches_month_year(record: &ActivityRecord, params: &TableQuery) -> bool {
    if params.month.is_none() && params.year.is_none() {
        return true;
    }
    let Ok(day) = record.day() else {
        return false;
    };
    params.month.map_or(true, |month| day.month() == month)
        && params.year.map_or(true, |year| day.year() == year)
}

fn matches_search(record: &ActivityRecord, params: &TableQuery) -> bool {
    let Some(search) = params.search.as_deref() else {
        return true;
    };
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    searchable_fields(record)
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Date, time and every numeric field rendered as text, the search domain.
fn searchable_fields(record: &ActivityRecord) -> [String; 9] {
    [
        record.date.clone(),
        record.time.clone(),
        record.queued.to_string(),
        record.presented.to_string(),
        record.answered.to_string(),
        record.answered_within_60s.to_string(),
        record.abandoned.to_string(),
        record.bounced_count().to_string(),
        record.percent_answered.to_string(),
    ]
}

/// Type-aware comparison on a single column.
fn compare_by(a: &ActivityRecord, b: &ActivityRecord, field: SortField) -> Ordering {
    match field {
        SortField::Date => compare_dates(&a.date, &b.date),
        SortField::Time => compare_times(&a.time, &b.time),
        SortField::Queued => a.queued.cmp(&b.queued),
        SortField::Presented => a.presented.cmp(&b.presented),
        SortField::Answered => a.answered.cmp(&b.answered),
        SortField::AnsweredWithin60s => a.answered_within_60s.cmp(&b.answered_within_60s),
        SortField::Abandoned => a.abandoned.cmp(&b.abandoned),
        // Fixed-width zero-padded strings order the same as their durations
        SortField::LongestWait => a.longest_wait.cmp(&b.longest_wait),
        SortField::LongestAnswer => a.longest_answer.cmp(&b.longest_answer),
        SortField::LongestAbandoned => a.longest_abandoned.cmp(&b.longest_abandoned),
        SortField::PercentAnswered => a.percent_answered.cmp(&b.percent_answered),
    }
}

fn compare_dates(a: &str, b: &str) -> Ordering {
    let parse = |raw: &str| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok();
    match (parse(a), parse(b)) {
        (Some(da), Some(db)) => da.cmp(&db),
        // Unparseable dates sink below parseable ones
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn compare_times(a: &str, b: &str) -> Ordering {
    match (minutes_of_day(a), minutes_of_day(b)) {
        (Some(ma), Some(mb)) => ma.cmp(&mb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Parse an "H:MM" label into minutes of day.
fn minutes_of_day(label: &str) -> Option<u32> {
    let (hours, minutes) = label.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    Some(hours * 60 + minutes)
}
