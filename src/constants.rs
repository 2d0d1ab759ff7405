//! Application constants for the contact processor
//!
//! This module contains all alias tables, indicator header names, default
//! values, and threshold constants used throughout the processing pipeline.
//! Alias tables are deliberately kept as static ordered data so that column
//! resolution stays auditable and testable in isolation.

// =============================================================================
// Dataset Detection
// =============================================================================

/// Header names whose literal presence marks a dataset as call-center data.
///
/// Matched exactly against the raw header text, never through aliases.
/// A header set containing none of these is treated as ticket data.
pub const CALL_CENTER_INDICATORS: &[&str] =
    &["Direction", "Call Result", "Agent", "Talk Time", "Queue"];

// =============================================================================
// Column Alias Tables
// =============================================================================

/// A canonical field paired with its ordered header-alias candidates.
///
/// Alias order is priority order: the first alias present in the header set
/// wins, so reordering an entry changes resolution behavior.
pub type AliasTable = &'static [(&'static str, &'static [&'static str])];

/// Required canonical fields for call-center datasets
pub const CALL_REQUIRED_FIELDS: AliasTable = &[
    (
        "Direction",
        &["Direction", "Call Direction", "Call Type", "Type"],
    ),
    (
        "Agent",
        &["Agent", "Agent Name", "Rep", "Representative", "Operator"],
    ),
    (
        "Call Result",
        &["Call Result", "Result", "Outcome", "Disposition"],
    ),
    (
        "Talk Time",
        &[
            "Talk Time",
            "Duration",
            "Call Duration",
            "Talk Duration",
            "Handle Time",
        ],
    ),
    (
        "Queue",
        &["Queue", "Queue Name", "Department", "Skill Group"],
    ),
];

/// Optional canonical fields for call-center datasets
pub const CALL_OPTIONAL_FIELDS: AliasTable = &[
    ("Call ID", &["Call ID", "CallID", "Call Id", "Id", "ID"]),
    (
        "Start Date",
        &["Start Date", "Call Date", "Date", "Start Time", "Timestamp"],
    ),
    (
        "Time in Queue",
        &["Time in Queue", "Queue Time", "Wait Time", "Waiting Time"],
    ),
    ("Abandoned", &["Abandoned", "Is Abandoned", "Abandon"]),
    ("Lost in IVR", &["Lost in IVR", "IVR Lost", "Lost IVR"]),
    (
        "Survey Rating",
        &["Survey Rating", "Survey Score", "CSAT", "Rating"],
    ),
    (
        "On Hold Duration",
        &["On Hold Duration", "Hold Time", "Hold Duration", "On Hold"],
    ),
    (
        "Repeats",
        &["Repeats", "Repeat Calls", "Repeat Count", "Callbacks"],
    ),
];

/// Required canonical fields for ticket datasets
pub const TICKET_REQUIRED_FIELDS: AliasTable = &[
    (
        "Customer Name",
        &["Customer Name", "Customer", "Client", "Requester", "Name"],
    ),
    (
        "Issue Type",
        &["Issue Type", "Issue", "Subject", "Topic", "Request Type"],
    ),
    ("Priority", &["Priority", "Severity", "Urgency"]),
    ("Status", &["Status", "Ticket Status", "State"]),
];

/// Optional canonical fields for ticket datasets
pub const TICKET_OPTIONAL_FIELDS: AliasTable = &[
    (
        "Ticket ID",
        &[
            "Ticket ID",
            "TicketID",
            "Ticket Number",
            "Reference",
            "Id",
            "ID",
        ],
    ),
    (
        "Response Time",
        &[
            "Response Time",
            "First Response",
            "First Response Time",
            "Time to Response",
        ],
    ),
    (
        "Resolution Time",
        &[
            "Resolution Time",
            "Time to Resolution",
            "Resolve Time",
            "Resolution",
        ],
    ),
    (
        "Customer Rating",
        &[
            "Customer Rating",
            "Satisfaction",
            "CSAT",
            "Feedback Score",
            "Rating",
        ],
    ),
    (
        "Created At",
        &[
            "Created At",
            "Created",
            "Created Date",
            "Open Date",
            "Opened",
            "Date",
        ],
    ),
    (
        "Assigned To",
        &["Assigned To", "Assignee", "Agent", "Owner", "Handler"],
    ),
    ("Category", &["Category", "Group", "Department"]),
    ("Tags", &["Tags", "Labels", "Keywords"]),
];

// =============================================================================
// Normalization Vocabularies
// =============================================================================

/// Priority bucket membership, matched case-insensitively
pub mod priority_vocab {
    pub const HIGH: &[&str] = &["high", "critical", "urgent"];
    pub const MEDIUM: &[&str] = &["medium", "normal", "moderate"];
    pub const LOW: &[&str] = &["low", "minor"];
}

/// Status bucket membership, matched case-insensitively.
///
/// Each bucket contains its own normalized form so normalization is a fixed
/// point: feeding a normalized status back in returns the same status.
pub mod status_vocab {
    pub const RESOLVED: &[&str] = &["resolved", "closed", "completed", "solved"];
    pub const IN_PROGRESS: &[&str] = &["in-progress", "in progress", "working", "processing"];
    pub const PENDING: &[&str] = &["pending", "open", "new", "assigned"];
}

/// Call direction vocabulary, matched exactly (case-insensitive) rather than
/// by substring, so queue names like "Maintenance" can never count as inbound.
pub mod direction_vocab {
    pub const INBOUND: &[&str] = &["inbound", "in", "incoming"];
    pub const OUTBOUND: &[&str] = &["outbound", "out", "outgoing"];
}

/// Boolean flag values accepted as true, compared case-sensitively
pub const TRUE_FLAG_VALUES: &[&str] = &["true", "1", "yes"];

// =============================================================================
// Record Defaults
// =============================================================================

/// Agent name substituted when the agent cell is blank
pub const DEFAULT_AGENT: &str = "Unknown Agent";

/// Call result substituted when the result cell is blank
pub const DEFAULT_CALL_RESULT: &str = "Unknown";

/// Queue name substituted when the queue cell is blank
pub const DEFAULT_QUEUE: &str = "General";

/// Assignee substituted when the assigned-to cell is blank
pub const DEFAULT_ASSIGNEE: &str = "Unassigned";

/// Category substituted when the category cell is blank
pub const DEFAULT_CATEGORY: &str = "General";

/// Distribution key used when a categorical cell is blank
pub const UNKNOWN_KEY: &str = "Unknown";

/// Synthetic identifier prefixes for records with a blank id cell
pub const CALL_ID_PREFIX: &str = "C";
pub const TICKET_ID_PREFIX: &str = "T";

/// Separator for the ticket tags field
pub const TAG_SEPARATOR: char = ';';

// =============================================================================
// Analytics Thresholds
// =============================================================================

/// SLA threshold for first response, in hours
pub const SLA_FIRST_RESPONSE_HOURS: f64 = 4.0;

/// SLA threshold for resolution, in hours
pub const SLA_RESOLUTION_HOURS: f64 = 24.0;

/// Minimum customer rating counted as satisfied
pub const SATISFACTION_THRESHOLD: f64 = 4.0;

/// Closed interval of valid survey/customer ratings
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;

// =============================================================================
// Input Limits (enforced by the CLI caller, not the core)
// =============================================================================

/// Maximum accepted input file size in megabytes
pub const MAX_INPUT_SIZE_MB: u64 = 10;

/// Accepted input file extension
pub const INPUT_EXTENSION: &str = "csv";
