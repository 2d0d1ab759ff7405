//! Per-row assembly of normalized records
//!
//! This module applies the resolved column map and the field parsers to one
//! raw row at a time, producing a typed record. Untyped rows do not travel
//! past this boundary. A blank identifier cell gets a synthetic sequential
//! id so every record is addressable downstream.

use chrono::{DateTime, Utc};

use super::column_map::ColumnMap;
use super::field_parsers::{parse_count, parse_flag, parse_rating, parse_time_value};
use crate::Result;
use crate::app::models::{CallRecord, Priority, RawRow, Status, TicketRecord};
use crate::constants::{
    DEFAULT_AGENT, DEFAULT_ASSIGNEE, DEFAULT_CALL_RESULT, DEFAULT_CATEGORY, DEFAULT_QUEUE,
    TAG_SEPARATOR,
};

/// Format a synthetic zero-padded sequential identifier, e.g. `C-001`
pub fn synthetic_id(prefix: &str, sequence: usize) -> String {
    format!("{}-{:03}", prefix, sequence + 1)
}

/// Build one normalized call record from a raw row.
///
/// `sequence` is the zero-based position of the row among accepted rows and
/// seeds the synthetic id; `processed_at` is the timestamp captured once per
/// processing run and substituted for a missing start date.
pub fn build_call_record(
    row: &RawRow,
    map: &ColumnMap,
    sequence: usize,
    processed_at: &DateTime<Utc>,
) -> Result<CallRecord> {
    let id = match map.cell(row, "Call ID")? {
        Some(value) => value.to_string(),
        None => synthetic_id(map.kind().id_prefix(), sequence),
    };

    Ok(CallRecord {
        id,
        direction: map.cell(row, "Direction")?.unwrap_or("").to_string(),
        agent: map.cell(row, "Agent")?.unwrap_or(DEFAULT_AGENT).to_string(),
        call_result: map
            .cell(row, "Call Result")?
            .unwrap_or(DEFAULT_CALL_RESULT)
            .to_string(),
        talk_time: parse_time_value(map.cell(row, "Talk Time")?.unwrap_or("")),
        queue: map.cell(row, "Queue")?.unwrap_or(DEFAULT_QUEUE).to_string(),
        start_date: match map.cell(row, "Start Date")? {
            Some(value) => value.to_string(),
            None => processed_at.to_rfc3339(),
        },
        time_in_queue: parse_time_value(map.cell(row, "Time in Queue")?.unwrap_or("")),
        abandoned: parse_flag(map.cell(row, "Abandoned")?.unwrap_or("")),
        lost_in_ivr: parse_flag(map.cell(row, "Lost in IVR")?.unwrap_or("")),
        survey_rating: parse_rating(map.cell(row, "Survey Rating")?.unwrap_or("")),
        on_hold_duration: parse_time_value(map.cell(row, "On Hold Duration")?.unwrap_or("")),
        repeats: parse_count(map.cell(row, "Repeats")?.unwrap_or("")),
    })
}

/// Build one normalized ticket record from a raw row.
///
/// Same sequencing and timestamp contract as [`build_call_record`].
pub fn build_ticket_record(
    row: &RawRow,
    map: &ColumnMap,
    sequence: usize,
    processed_at: &DateTime<Utc>,
) -> Result<TicketRecord> {
    let id = match map.cell(row, "Ticket ID")? {
        Some(value) => value.to_string(),
        None => synthetic_id(map.kind().id_prefix(), sequence),
    };

    Ok(TicketRecord {
        id,
        customer_name: map.cell(row, "Customer Name")?.unwrap_or("").to_string(),
        issue_type: map.cell(row, "Issue Type")?.unwrap_or("").to_string(),
        priority: Priority::normalize(map.cell(row, "Priority")?.unwrap_or("")),
        status: Status::normalize(map.cell(row, "Status")?.unwrap_or("")),
        response_time: parse_time_value(map.cell(row, "Response Time")?.unwrap_or("")),
        resolution_time: parse_time_value(map.cell(row, "Resolution Time")?.unwrap_or("")),
        customer_rating: parse_rating(map.cell(row, "Customer Rating")?.unwrap_or("")),
        created_at: match map.cell(row, "Created At")? {
            Some(value) => value.to_string(),
            None => processed_at.to_rfc3339(),
        },
        assigned_to: map
            .cell(row, "Assigned To")?
            .unwrap_or(DEFAULT_ASSIGNEE)
            .to_string(),
        category: map
            .cell(row, "Category")?
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string(),
        tags: split_tags(map.cell(row, "Tags")?.unwrap_or("")),
    })
}

/// Split a tags cell on the separator, trimming and discarding empty entries
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
