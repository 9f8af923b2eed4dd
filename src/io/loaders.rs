//! Loading activity records from already-fetched JSON documents.
//!
//! The transport that fetches the document is someone else's job; this
//! module only turns its payload into typed records. Structural failures
//! (the payload is not a record list at all) are the one class of error
//! the engine propagates.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::models::ActivityRecord;

/// Accepted payload shapes: a bare array, or the export wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsDocument {
    Bare(Vec<ActivityRecord>),
    Wrapped { records: Vec<ActivityRecord> },
}

/// Parse activity records from a JSON document string.
pub fn load_records_from_str(json: &str) -> Result<Vec<ActivityRecord>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let document: RecordsDocument = serde_path_to_error::deserialize(&mut deserializer)
        .context("Failed to deserialize activity records")?;

    Ok(match document {
        RecordsDocument::Bare(records) => records,
        RecordsDocument::Wrapped { records } => records,
    })
}

/// Parse activity records from a JSON document on disk.
pub fn load_records_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<ActivityRecord>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file {}", path.display()))?;
    load_records_from_str(&json)
}
