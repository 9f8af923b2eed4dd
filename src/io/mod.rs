//! Input boundary: JSON document loaders.

pub mod loaders;

pub use loaders::{load_records_from_file, load_records_from_str};
