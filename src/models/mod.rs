//! Core data model: activity records and the duration codec.

pub mod duration;
pub mod record;

pub use duration::{duration_of, is_no_event, seconds_of, NO_EVENT};
pub use record::ActivityRecord;
