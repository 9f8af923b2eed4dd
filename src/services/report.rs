//! One-call orchestration of every derived view over a shared subset.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::models::ActivityRecord;

use super::heatmap::{self, HeatmapData};
use super::rollup::{self, DistributionShares, StatSummary};
use super::series::{self, Granularity, SeriesBucket};
use super::timeframe::{self, TimeFrame};

/// Every aggregate a reporting surface renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityReport {
    pub summary: StatSummary,
    pub shares: DistributionShares,
    pub daily: Vec<SeriesBucket>,
    pub monthly: Vec<SeriesBucket>,
    pub yearly: Vec<SeriesBucket>,
    pub weekdays: Vec<SeriesBucket>,
    pub heatmap: HeatmapData,
    /// Records dropped by the filter because their date would not parse
    pub malformed_dates: usize,
}

/// Filter once, then derive every view from that same subset.
///
/// The summary, series, shares and heatmap must all read the records the
/// time frame selected; deriving any of them from the unfiltered input
/// makes the cards disagree with the charts.
pub fn build_report(
    records: &[ActivityRecord],
    frame: &TimeFrame,
    today: NaiveDate,
    config: &EngineConfig,
) -> ActivityReport {
    let filtered = timeframe::filter_records(records, frame, today);
    debug!(
        "building report over {} records ({} dropped as malformed)",
        filtered.records.len(),
        filtered.malformed_dates
    );

    let summary = rollup::compute_summary(&filtered.records);
    let shares = rollup::compute_shares(&summary);

    ActivityReport {
        shares,
        daily: series::compute_series(&filtered.records, Granularity::Daily),
        monthly: series::compute_series(&filtered.records, Granularity::Monthly),
        yearly: series::compute_series(&filtered.records, Granularity::Yearly),
        weekdays: series::compute_weekday_summary(&filtered.records),
        heatmap: heatmap::compute_heatmap(&filtered.records, config.business_hours),
        malformed_dates: filtered.malformed_dates,
        summary,
    }
}
