//! Public API surface for the reporting engine.
//!
//! This file consolidates the derived-view types a reporting surface
//! consumes. All types serialize to JSON and carry no references back to
//! the input records.

pub use crate::models::ActivityRecord;

pub use crate::services::heatmap::{HeatmapCell, HeatmapData, WeekPage};
pub use crate::services::report::ActivityReport;
pub use crate::services::rollup::{DistributionShares, StatSummary};
pub use crate::services::series::{Granularity, SeriesBucket};
pub use crate::services::table::{SortDir, SortField, TablePage, TableQuery};
pub use crate::services::timeframe::{FilterOutcome, TimeFrame};
