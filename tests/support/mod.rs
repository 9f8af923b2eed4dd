use acd_reports::api::ActivityRecord;

/// Build a quiet record for one slot; tests adjust fields as needed.
pub fn record(date: &str, time: &str) -> ActivityRecord {
    ActivityRecord {
        date: date.to_string(),
        time: time.to_string(),
        queued: 0,
        presented: 0,
        answered: 0,
        answered_within_60s: 0,
        abandoned: 0,
        bounced: None,
        longest_wait: "00:00:00".to_string(),
        longest_answer: "00:00:00".to_string(),
        longest_abandoned: "00:00:00".to_string(),
        percent_answered: 0,
    }
}

/// Build a record carrying call counts, with `presented = queued + bounced`
/// the way the upstream exporter constructs it.
pub fn busy_record(
    date: &str,
    time: &str,
    answered: u32,
    answered_within_60s: u32,
    abandoned: u32,
    bounced: u32,
) -> ActivityRecord {
    let queued = answered + abandoned;
    ActivityRecord {
        queued,
        presented: queued + bounced,
        answered,
        answered_within_60s,
        abandoned,
        bounced: Some(bounced),
        percent_answered: if queued > 0 {
            100 * answered / queued
        } else {
            0
        },
        ..record(date, time)
    }
}
