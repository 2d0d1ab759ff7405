//! Processing statistics and result structures
//!
//! This module provides the single value returned to callers after a
//! processing run, plus the statistics tracked along the way. Dropped and
//! skipped row counts are surfaced here rather than silently discarded.

use serde::Serialize;

use super::analytics::{Analytics, DateRange};
use crate::app::models::{DatasetKind, ProcessedData, RawRow};

/// Statistics for one processing run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStats {
    /// Non-blank data lines inspected by the tabular parser
    pub data_lines: usize,

    /// Rows accepted (field count matched the header count)
    pub rows_accepted: usize,

    /// Rows dropped by the tabular parser for a field-count mismatch
    pub rows_dropped: usize,

    /// Accepted rows the record builder skipped because of an error
    pub records_skipped: usize,

    /// Row-level error messages for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Percentage of inspected data lines that became normalized records
    pub fn success_rate(&self) -> f64 {
        if self.data_lines == 0 {
            0.0
        } else {
            let records = self.rows_accepted - self.records_skipped;
            (records as f64 / self.data_lines as f64) * 100.0
        }
    }
}

/// Dataset-level summary for quick display
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of normalized records
    pub total_count: usize,

    /// Distinct agents (call center) or distinct customers (ticket)
    pub distinct_entity_count: usize,

    /// First/last parseable record date
    pub date_range: DateRange,

    /// Header names found in the input, in column order
    pub columns: Vec<String>,
}

/// The complete output of one processing run.
///
/// Owned by the caller and immutable once returned; a new upload produces a
/// brand-new result rather than updating this one. Field names serialize in
/// camelCase because the visualization collaborator reads them by name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    /// Accepted raw rows exactly as parsed, for the caller's storage layer
    pub raw_data: Vec<RawRow>,

    /// Normalized record sequence
    pub processed_data: ProcessedData,

    /// Aggregate analytics over `processed_data`
    pub analytics: Analytics,

    /// Detected dataset kind
    pub data_type: DatasetKind,

    /// Dataset-level summary
    pub summary: Summary,

    /// Drop/skip accounting for this run
    pub stats: ParseStats,
}
