//! Service layer: the pure transformation engine over activity records.
//!
//! Every function here is a pure function of (record subset, parameters).
//! Aggregates are recomputed fresh per call and never hold references back
//! to the input records.

pub mod export;

pub mod heatmap;

pub mod report;

pub mod rollup;

pub mod series;

pub mod table;

pub mod timeframe;


pub use export::records_to_csv;
pub use heatmap::compute_heatmap;
pub use report::build_report;
pub use rollup::{compute_shares, compute_summary};
pub use series::{compute_series, compute_weekday_summary};
pub use table::query_table;
pub use timeframe::filter_records;
