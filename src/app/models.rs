//! Data models for contact data processing
//!
//! This module contains the core record structures produced by the analysis
//! pipeline: call-center records, ticket records, and the enumerations used
//! to normalize free-text cells into a closed vocabulary. Untyped rows stop
//! at the column-resolution boundary; everything downstream of it works with
//! these explicit tagged types.

use crate::constants::{direction_vocab, priority_vocab, status_vocab};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// =============================================================================
// Dataset Kind
// =============================================================================

/// The two supported dataset shapes, mutually exclusive per input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    #[serde(rename = "callCenter")]
    CallCenter,
    #[serde(rename = "ticket")]
    Ticket,
}

impl DatasetKind {
    /// Human-readable dataset name for error messages and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::CallCenter => "call center",
            DatasetKind::Ticket => "ticket",
        }
    }

    /// Synthetic id prefix for records of this kind
    pub fn id_prefix(&self) -> &'static str {
        match self {
            DatasetKind::CallCenter => crate::constants::CALL_ID_PREFIX,
            DatasetKind::Ticket => crate::constants::TICKET_ID_PREFIX,
        }
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Normalized Vocabulary Enumerations
// =============================================================================

/// Call direction, parsed from a small canonical vocabulary.
///
/// Matching is exact (after trimming and lowercasing) rather than substring
/// based, falling back to `Unknown` instead of silently miscounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
    Unknown,
}

impl Direction {
    /// Classify a raw direction cell
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim().to_lowercase();
        if direction_vocab::INBOUND.contains(&value.as_str()) {
            Direction::Inbound
        } else if direction_vocab::OUTBOUND.contains(&value.as_str()) {
            Direction::Outbound
        } else {
            Direction::Unknown
        }
    }
}

/// Normalized ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Normalize a raw priority cell into one of the three buckets.
    ///
    /// Matching is case-insensitive against the bucket vocabularies; anything
    /// unmatched (including a blank cell) normalizes to `Medium`. Normalized
    /// output is a fixed point of this function.
    pub fn normalize(raw: &str) -> Self {
        let value = raw.trim().to_lowercase();
        if priority_vocab::HIGH.contains(&value.as_str()) {
            Priority::High
        } else if priority_vocab::LOW.contains(&value.as_str()) {
            Priority::Low
        } else {
            // The medium vocabulary and everything unmatched both land here
            Priority::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized ticket status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "resolved")]
    Resolved,
}

impl Status {
    /// Normalize a raw status cell into one of the three buckets.
    ///
    /// Matching is case-insensitive; anything unmatched (including a blank
    /// cell) normalizes to `Pending`. Normalized output is a fixed point.
    pub fn normalize(raw: &str) -> Self {
        let value = raw.trim().to_lowercase();
        if status_vocab::RESOLVED.contains(&value.as_str()) {
            Status::Resolved
        } else if status_vocab::IN_PROGRESS.contains(&value.as_str()) {
            Status::InProgress
        } else {
            Status::Pending
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in-progress",
            Status::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Raw Row
// =============================================================================

/// A single accepted input row: header/value pairs in column order.
///
/// Raw rows exist only between the tabular parser and the record builder;
/// they are kept on the result for the caller's storage layer but are never
/// consulted by analytics.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    /// Build a row by zipping header names with cell values
    pub fn new(headers: &[String], values: Vec<String>) -> Self {
        let cells = headers.iter().cloned().zip(values).collect();
        Self { cells }
    }

    /// Look up a cell by header name (linear scan; rows are narrow)
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }

    /// Look up a cell by column position
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// Serialized as a JSON object so the storage collaborator sees header-keyed
// maps, preserving column order.
impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Normalized Record Structures
// =============================================================================

/// A normalized call-center activity record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    /// Record identifier; synthetic `C-NNN` when the source cell is blank
    pub id: String,

    /// Raw direction text as exported; classified via [`Direction::parse`]
    /// when counted
    pub direction: String,

    /// Handling agent name
    pub agent: String,

    /// Call outcome/disposition
    pub call_result: String,

    /// Conversed duration in fractional hours, never negative
    pub talk_time: f64,

    /// Queue or skill group the call arrived on
    pub queue: String,

    /// Call start timestamp as exported; processing time when absent
    pub start_date: String,

    /// Time spent waiting in queue, fractional hours
    pub time_in_queue: f64,

    /// Caller hung up before reaching an agent
    pub abandoned: bool,

    /// Caller disconnected while navigating the IVR menu
    pub lost_in_ivr: bool,

    /// Post-call survey rating in [1,5], or 0 when absent/invalid
    pub survey_rating: f64,

    /// Cumulative hold duration, fractional hours
    pub on_hold_duration: f64,

    /// Number of repeat calls associated with this contact
    pub repeats: u32,
}

/// A normalized customer-service ticket record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRecord {
    /// Record identifier; synthetic `T-NNN` when the source cell is blank
    pub id: String,

    pub customer_name: String,

    pub issue_type: String,

    pub priority: Priority,

    pub status: Status,

    /// Time to first response, fractional hours (0 = not recorded)
    pub response_time: f64,

    /// Time to resolution, fractional hours (0 = not recorded)
    pub resolution_time: f64,

    /// Customer rating in [1,5], or 0 when absent/invalid
    pub customer_rating: f64,

    /// Ticket creation timestamp as exported; processing time when absent
    pub created_at: String,

    pub assigned_to: String,

    pub category: String,

    /// Trimmed tags split on `;`, empty entries discarded
    pub tags: Vec<String>,
}

/// The full normalized record sequence, tagged by dataset kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProcessedData {
    Calls(Vec<CallRecord>),
    Tickets(Vec<TicketRecord>),
}

impl ProcessedData {
    pub fn len(&self) -> usize {
        match self {
            ProcessedData::Calls(records) => records.len(),
            ProcessedData::Tickets(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_calls(&self) -> Option<&[CallRecord]> {
        match self {
            ProcessedData::Calls(records) => Some(records),
            ProcessedData::Tickets(_) => None,
        }
    }

    pub fn as_tickets(&self) -> Option<&[TicketRecord]> {
        match self {
            ProcessedData::Tickets(records) => Some(records),
            ProcessedData::Calls(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod direction_tests {
        use super::*;

        #[test]
        fn test_direction_canonical_vocabulary() {
            assert_eq!(Direction::parse("Inbound"), Direction::Inbound);
            assert_eq!(Direction::parse("  in "), Direction::Inbound);
            assert_eq!(Direction::parse("INCOMING"), Direction::Inbound);
            assert_eq!(Direction::parse("Outbound"), Direction::Outbound);
            assert_eq!(Direction::parse("out"), Direction::Outbound);
            assert_eq!(Direction::parse("outgoing"), Direction::Outbound);
        }

        #[test]
        fn test_direction_rejects_substring_matches() {
            // "Maintenance" contains "in" but is not a direction
            assert_eq!(Direction::parse("Maintenance"), Direction::Unknown);
            assert_eq!(Direction::parse("internal"), Direction::Unknown);
            assert_eq!(Direction::parse(""), Direction::Unknown);
        }
    }

    mod priority_tests {
        use super::*;

        #[test]
        fn test_priority_buckets() {
            assert_eq!(Priority::normalize("Critical"), Priority::High);
            assert_eq!(Priority::normalize("URGENT"), Priority::High);
            assert_eq!(Priority::normalize("high"), Priority::High);
            assert_eq!(Priority::normalize("normal"), Priority::Medium);
            assert_eq!(Priority::normalize("Moderate"), Priority::Medium);
            assert_eq!(Priority::normalize("minor"), Priority::Low);
            assert_eq!(Priority::normalize("Low"), Priority::Low);
        }

        #[test]
        fn test_priority_defaults_to_medium() {
            assert_eq!(Priority::normalize(""), Priority::Medium);
            assert_eq!(Priority::normalize("whenever"), Priority::Medium);
        }

        #[test]
        fn test_priority_normalization_is_idempotent() {
            for raw in ["critical", "normal", "minor", "garbage", ""] {
                let once = Priority::normalize(raw);
                let twice = Priority::normalize(once.as_str());
                assert_eq!(once, twice);
            }
        }
    }

    mod status_tests {
        use super::*;

        #[test]
        fn test_status_buckets() {
            assert_eq!(Status::normalize("Closed"), Status::Resolved);
            assert_eq!(Status::normalize("COMPLETED"), Status::Resolved);
            assert_eq!(Status::normalize("solved"), Status::Resolved);
            assert_eq!(Status::normalize("in progress"), Status::InProgress);
            assert_eq!(Status::normalize("Working"), Status::InProgress);
            assert_eq!(Status::normalize("processing"), Status::InProgress);
            assert_eq!(Status::normalize("open"), Status::Pending);
            assert_eq!(Status::normalize("New"), Status::Pending);
            assert_eq!(Status::normalize("assigned"), Status::Pending);
        }

        #[test]
        fn test_status_defaults_to_pending() {
            assert_eq!(Status::normalize(""), Status::Pending);
            assert_eq!(Status::normalize("escalated to vendor"), Status::Pending);
        }

        #[test]
        fn test_status_normalization_is_idempotent() {
            for raw in ["closed", "in progress", "open", "garbage", ""] {
                let once = Status::normalize(raw);
                let twice = Status::normalize(once.as_str());
                assert_eq!(once, twice);
            }
        }
    }

    mod raw_row_tests {
        use super::*;

        fn sample_row() -> RawRow {
            let headers = vec!["Agent".to_string(), "Queue".to_string()];
            RawRow::new(&headers, vec!["Alice".to_string(), "Billing".to_string()])
        }

        #[test]
        fn test_raw_row_lookup() {
            let row = sample_row();
            assert_eq!(row.get("Agent"), Some("Alice"));
            assert_eq!(row.get("Queue"), Some("Billing"));
            assert_eq!(row.get("Missing"), None);
            assert_eq!(row.value_at(1), Some("Billing"));
            assert_eq!(row.value_at(5), None);
            assert_eq!(row.len(), 2);
        }

        #[test]
        fn test_raw_row_serializes_as_ordered_map() {
            let row = sample_row();
            let json = serde_json::to_string(&row).unwrap();
            assert_eq!(json, r#"{"Agent":"Alice","Queue":"Billing"}"#);
        }
    }

    #[test]
    fn test_dataset_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&DatasetKind::CallCenter).unwrap(),
            "\"callCenter\""
        );
        assert_eq!(
            serde_json::to_string(&DatasetKind::Ticket).unwrap(),
            "\"ticket\""
        );
    }

    #[test]
    fn test_status_serialization_uses_normalized_strings() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    }
}
