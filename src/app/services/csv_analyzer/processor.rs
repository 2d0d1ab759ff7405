//! Core processing orchestration
//!
//! This module coordinates the pipeline stages: tabular parsing, dataset
//! detection, column resolution, record building, and aggregation. The text
//! pipeline is fully synchronous and a pure function of its input (aside
//! from the wall-clock default substituted for missing dates); only the
//! initial file read is asynchronous. Concurrent invocations on different
//! inputs are safe without locking because no state crosses invocations.

use std::collections::HashSet;
use std::path::Path;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::analytics::{self, Analytics};
use super::column_map::ColumnMap;
use super::record_builder::{build_call_record, build_ticket_record};
use super::schema::detect_kind;
use super::stats::{ParseStats, ProcessingResult, Summary};
use super::tabular::{RawTable, parse_table};
use crate::app::models::{CallRecord, DatasetKind, ProcessedData, TicketRecord};
use crate::{Error, Result};

/// Processor for contact-center and helpdesk CSV exports
///
/// The processor holds no state; it exists so callers have one place to
/// construct and so future knobs have somewhere to live.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvProcessor;

impl CsvProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Read a file and process its contents.
    ///
    /// Only the read is asynchronous; the pipeline itself runs to completion
    /// synchronously once the text is in memory. Returns `Ok(None)` for a
    /// structurally empty file (fewer than two non-blank lines).
    pub async fn process_file(&self, file_path: &Path) -> Result<Option<ProcessingResult>> {
        info!("Processing export file: {}", file_path.display());

        let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
            Error::io_error(format!("Failed to read file {}: {}", file_path.display(), e))
        })?;

        self.process_text(&content)
    }

    /// Process raw export text into a [`ProcessingResult`].
    ///
    /// Returns `Ok(None)` when the input has fewer than two non-blank lines;
    /// callers must check before using the result. Column-resolution
    /// failures are the only fatal error for a well-formed table.
    pub fn process_text(&self, text: &str) -> Result<Option<ProcessingResult>> {
        let Some(table) = parse_table(text) else {
            debug!("Input has fewer than two non-blank lines");
            return Ok(None);
        };

        let kind = detect_kind(&table.headers);
        info!(
            "Detected {} data: {} columns, {} rows ({} dropped)",
            kind,
            table.headers.len(),
            table.rows.len(),
            table.dropped_rows
        );

        let map = ColumnMap::resolve(kind, &table.headers)?;

        let mut stats = ParseStats {
            data_lines: table.data_lines(),
            rows_accepted: table.rows.len(),
            rows_dropped: table.dropped_rows,
            ..Default::default()
        };

        let (processed_data, analytics, summary) = match kind {
            DatasetKind::CallCenter => self.process_calls(&table, &map, &mut stats),
            DatasetKind::Ticket => self.process_tickets(&table, &map, &mut stats),
        };

        info!(
            "Processed {} records from {} accepted rows ({:.1}% of data lines)",
            processed_data.len(),
            stats.rows_accepted,
            stats.success_rate()
        );

        Ok(Some(ProcessingResult {
            raw_data: table.rows,
            processed_data,
            analytics,
            data_type: kind,
            summary,
            stats,
        }))
    }

    /// Build and aggregate the call-center record sequence.
    ///
    /// Row-level build errors are logged and the row skipped; processing
    /// continues for the remaining rows.
    fn process_calls(
        &self,
        table: &RawTable,
        map: &ColumnMap,
        stats: &mut ParseStats,
    ) -> (ProcessedData, Analytics, Summary) {
        let processed_at = Utc::now();
        let mut records: Vec<CallRecord> = Vec::with_capacity(table.rows.len());

        for (sequence, row) in table.rows.iter().enumerate() {
            match build_call_record(row, map, sequence, &processed_at) {
                Ok(record) => records.push(record),
                Err(e) => {
                    stats.records_skipped += 1;
                    stats.errors.push(format!("Row {}: {}", sequence + 1, e));
                    warn!("Skipped row {}: {}", sequence + 1, e);
                }
            }
        }

        let date_range =
            analytics::compute_date_range(records.iter().map(|r| r.start_date.as_str()));
        let distinct_agents: HashSet<&str> = records.iter().map(|r| r.agent.as_str()).collect();

        let summary = Summary {
            total_count: records.len(),
            distinct_entity_count: distinct_agents.len(),
            date_range,
            columns: table.headers.clone(),
        };

        let call_analytics = analytics::aggregate_calls(&records);

        (
            ProcessedData::Calls(records),
            Analytics::CallCenter(call_analytics),
            summary,
        )
    }

    /// Build and aggregate the ticket record sequence.
    ///
    /// Uses the same skip-and-continue policy as the call-center path, so a
    /// single bad row cannot abort the dataset on either path.
    fn process_tickets(
        &self,
        table: &RawTable,
        map: &ColumnMap,
        stats: &mut ParseStats,
    ) -> (ProcessedData, Analytics, Summary) {
        let processed_at = Utc::now();
        let mut records: Vec<TicketRecord> = Vec::with_capacity(table.rows.len());

        for (sequence, row) in table.rows.iter().enumerate() {
            match build_ticket_record(row, map, sequence, &processed_at) {
                Ok(record) => records.push(record),
                Err(e) => {
                    stats.records_skipped += 1;
                    stats.errors.push(format!("Row {}: {}", sequence + 1, e));
                    warn!("Skipped row {}: {}", sequence + 1, e);
                }
            }
        }

        let date_range =
            analytics::compute_date_range(records.iter().map(|r| r.created_at.as_str()));
        let distinct_customers: HashSet<&str> =
            records.iter().map(|r| r.customer_name.as_str()).collect();

        let summary = Summary {
            total_count: records.len(),
            distinct_entity_count: distinct_customers.len(),
            date_range,
            columns: table.headers.clone(),
        };

        let ticket_analytics = analytics::aggregate_tickets(&records);

        (
            ProcessedData::Tickets(records),
            Analytics::Ticket(ticket_analytics),
            summary,
        )
    }
}
