//! Summary statistics over an arbitrary subset of records.
//!
//! The rollup must produce numerically identical results whether applied to
//! the full set or to any filtered/bucketed subset covering the same rows:
//! every field is either a plain sum or derived from the sums, so the
//! partition invariant holds by construction.

use log::warn;
use serde::Serialize;

use crate::models::{duration, ActivityRecord};

/// Aggregate summary of a record subset.
///
/// Recomputed fresh on every filter change; never mutated in place, never
/// cached across different subsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatSummary {
    pub record_count: usize,
    pub queued: u64,
    pub presented: u64,
    pub answered: u64,
    pub answered_within_60s: u64,
    pub abandoned: u64,
    pub bounced: u64,
    /// abandoned + bounced
    pub not_answered: u64,
    /// Percentage of answered calls picked up within 60 seconds
    pub service_level_pct: u32,
    /// Mean of observed (non-sentinel) waits, re-encoded as "HH:MM:SS"
    pub average_wait: String,
    /// Lexicographic max of the raw fixed-width wait strings
    pub longest_wait: String,
    /// Presented calls per business-hour slot
    pub calls_per_slot: u64,
    /// Wait strings skipped because they failed to parse
    pub malformed_durations: usize,
}

/// Reduce a record subset into a single summary.
pub fn compute_summary(records: &[ActivityRecord]) -> StatSummary {
    let mut summary = StatSummary {
        record_count: records.len(),
        queued: 0,
        presented: 0,
        answered: 0,
        answered_within_60s: 0,
        abandoned: 0,
        bounced: 0,
        not_answered: 0,
        service_level_pct: 0,
        average_wait: duration::NO_EVENT.to_string(),
        longest_wait: duration::NO_EVENT.to_string(),
        calls_per_slot: 0,
        malformed_durations: 0,
    };

    let mut wait_total: u64 = 0;
    let mut wait_samples: u64 = 0;

    for record in records {
        summary.queued += u64::from(record.queued);
        summary.presented += u64::from(record.presented);
        summary.answered += u64::from(record.answered);
        summary.answered_within_60s += u64::from(record.answered_within_60s);
        summary.abandoned += u64::from(record.abandoned);
        summary.bounced += u64::from(record.bounced_count());

        match duration::seconds_of(&record.longest_wait) {
            Ok(seconds) => {
                // The sentinel carries no observed wait: it stays out of the
                // average but still takes part in the maximum, where it can
                // never beat a real duration.
                if !duration::is_no_event(&record.longest_wait) {
                    wait_total += u64::from(seconds);
                    wait_samples += 1;
                }
                if record.longest_wait > summary.longest_wait {
                    summary.longest_wait = record.longest_wait.clone();
                }
            }
            Err(err) => {
                warn!("skipping wait duration in rollup: {}", err);
                summary.malformed_durations += 1;
            }
        }
    }

    summary.not_answered = summary.abandoned + summary.bounced;

    if summary.answered > 0 {
        let pct = 100.0 * summary.answered_within_60s as f64 / summary.answered as f64;
        summary.service_level_pct = pct.round() as u32;
    }

    if wait_samples > 0 {
        let mean = wait_total as f64 / wait_samples as f64;
        summary.average_wait = duration::duration_of(mean.round() as u32);
    }

    summary.calls_per_slot =
        (summary.presented as f64 / records.len().max(1) as f64).round() as u64;

    summary
}

/// Integer percentage shares of the call outcome split (the donut view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistributionShares {
    pub answered_pct: u32,
    pub abandoned_pct: u32,
    pub bounced_pct: u32,
}

/// Outcome shares over answered + abandoned + bounced; all zero when the
/// subset saw no calls at all.
pub fn compute_shares(summary: &StatSummary) -> DistributionShares {
    let total = summary.answered + summary.abandoned + summary.bounced;
    if total == 0 {
        return DistributionShares {
            answered_pct: 0,
            abandoned_pct: 0,
            bounced_pct: 0,
        };
    }

    let pct = |part: u64| (100.0 * part as f64 / total as f64).round() as u32;
    DistributionShares {
        answered_pct: pct(summary.answered),
        abandoned_pct: pct(summary.abandoned),
        bounced_pct: pct(summary.bounced),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(answered: u32, within_60s: u32, abandoned: u32, wait: &str) -> ActivityRecord {
        ActivityRecord {
            date: "01-01-2024".to_string(),
            time: "9:00".to_string(),
            queued: answered + abandoned,
            presented: answered + abandoned,
            answered,
            answered_within_60s: within_60s,
            abandoned,
            bounced: None,
            longest_wait: wait.to_string(),
            longest_answer: "00:00:00".to_string(),
            longest_abandoned: "00:00:00".to_string(),
            percent_answered: 0,
        }
    }

    #[test]
    fn test_empty_subset_degrades_to_zeroes() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.answered, 0);
        assert_eq!(summary.service_level_pct, 0);
        assert_eq!(summary.average_wait, "00:00:00");
        assert_eq!(summary.longest_wait, "00:00:00");
        assert_eq!(summary.calls_per_slot, 0);
    }

    #[test]
    fn test_service_level_rounds() {
        // answered 12, within 60s 10 -> round(83.33) == 83
        let records = vec![
            record(5, 3, 1, "00:00:00"),
            record(0, 0, 0, "00:00:00"),
            record(7, 7, 0, "00:00:00"),
        ];
        let summary = compute_summary(&records);
        assert_eq!(summary.answered, 12);
        assert_eq!(summary.answered_within_60s, 10);
        assert_eq!(summary.service_level_pct, 83);
    }

    #[test]
    fn test_service_level_guards_divide_by_zero() {
        let records = vec![record(0, 0, 3, "00:01:00")];
        let summary = compute_summary(&records);
        assert_eq!(summary.service_level_pct, 0);
    }

    #[test]
    fn test_average_excludes_sentinel() {
        // Two real waits of 60s and 120s plus one sentinel: the mean is 90s
        // over the two qualifying rows, not 60s over three.
        let records = vec![
            record(1, 1, 0, "00:01:00"),
            record(1, 1, 0, "00:02:00"),
            record(1, 1, 0, "00:00:00"),
        ];
        let summary = compute_summary(&records);
        assert_eq!(summary.average_wait, "00:01:30");
    }

    #[test]
    fn test_longest_is_lexicographic_max_including_sentinel() {
        let records = vec![
            record(1, 1, 0, "00:00:00"),
            record(1, 1, 0, "00:09:59"),
            record(1, 1, 0, "00:10:00"),
        ];
        let summary = compute_summary(&records);
        assert_eq!(summary.longest_wait, "00:10:00");
    }

    #[test]
    fn test_malformed_wait_skipped_but_counts_kept() {
        let records = vec![record(4, 4, 0, "bogus"), record(2, 2, 0, "00:01:00")];
        let summary = compute_summary(&records);
        // Count fields still contribute
        assert_eq!(summary.answered, 6);
        assert_eq!(summary.malformed_durations, 1);
        // Duration math only sees the valid row
        assert_eq!(summary.average_wait, "00:01:00");
        assert_eq!(summary.longest_wait, "00:01:00");
    }

    #[test]
    fn test_calls_per_slot() {
        let records = vec![
            record(10, 10, 0, "00:00:00"),
            record(20, 20, 0, "00:00:00"),
            record(31, 31, 0, "00:00:00"),
        ];
        let summary = compute_summary(&records);
        // round(61 / 3) == 20
        assert_eq!(summary.calls_per_slot, 20);
    }

    #[test]
    fn test_partition_invariant_on_example() {
        let records = vec![
            record(5, 3, 1, "00:01:00"),
            record(0, 0, 0, "00:00:00"),
            record(7, 7, 0, "00:02:00"),
        ];
        let whole = compute_summary(&records);
        let left = compute_summary(&records[..1]);
        let right = compute_summary(&records[1..]);
        assert_eq!(whole.answered, left.answered + right.answered);
        assert_eq!(whole.abandoned, left.abandoned + right.abandoned);
        assert_eq!(whole.queued, left.queued + right.queued);
        assert_eq!(
            whole.answered_within_60s,
            left.answered_within_60s + right.answered_within_60s
        );
    }

    #[test]
    fn test_shares_sum_to_about_hundred() {
        let records = vec![record(8, 8, 2, "00:00:30")];
        let mut summary = compute_summary(&records);
        summary.bounced = 2;
        let shares = compute_shares(&summary);
        assert_eq!(shares.answered_pct, 67);
        assert_eq!(shares.abandoned_pct, 17);
        assert_eq!(shares.bounced_pct, 17);
    }

    #[test]
    fn test_shares_zero_denominator() {
        let shares = compute_shares(&compute_summary(&[]));
        assert_eq!(shares.answered_pct, 0);
        assert_eq!(shares.abandoned_pct, 0);
        assert_eq!(shares.bounced_pct, 0);
    }
}
