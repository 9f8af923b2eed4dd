//! CSV projection of a record subset for reporting exports.

use std::fmt::Write;

use crate::models::ActivityRecord;

/// Fixed export column order expected by the download surface.
const CSV_HEADER: &str =
    "date,time,queued,presented,answered,answered<60s,abandoned,wait,answer-time,abandon-time,percent-answered";

/// Render records as a CSV document with a header row.
///
/// No field in the data model can contain a comma or a quote, so no
/// escaping is required.
pub fn records_to_csv(records: &[ActivityRecord]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 64);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{}",
            record.date,
            record.time,
            record.queued,
            record.presented,
            record.answered,
            record.answered_within_60s,
            record.abandoned,
            record.longest_wait,
            record.longest_answer,
            record.longest_abandoned,
            record.percent_answered,
        );
    }
    out
}
