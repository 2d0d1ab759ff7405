//! Single-pass aggregation over the normalized record sequence
//!
//! This module computes frequency distributions, scalar averages, percentage
//! metrics, and per-agent rollups from a fully built record sequence. The
//! aggregator is a pure fold: it takes the records, returns a value, and is
//! recomputed from scratch whenever a dataset is reprocessed — there is no
//! incremental update path.
//!
//! Scalar averages are computed only over records where the underlying value
//! is strictly positive; the denominator is the filtered count. A genuinely
//! zero-duration call is therefore indistinguishable from a missing value,
//! which matches the consumer contract for these fields.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::field_parsers::parse_flexible_date;
use crate::app::models::{CallRecord, Direction, Status, TicketRecord};
use crate::constants::{
    SATISFACTION_THRESHOLD, SLA_FIRST_RESPONSE_HOURS, SLA_RESOLUTION_HOURS, UNKNOWN_KEY,
};

// =============================================================================
// Analytics Structures
// =============================================================================

/// Per-agent performance rollup, derived entirely from the call sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformance {
    pub total_calls: usize,
    pub inbound_calls: usize,
    pub outbound_calls: usize,

    /// Sum of talk time over every one of this agent's calls, hours
    pub total_talk_time: f64,

    /// `total_talk_time / total_calls` over the agent's own call count
    pub avg_talk_time: f64,

    /// Every valid (non-zero) survey rating this agent received
    pub survey_ratings: Vec<f64>,

    /// Mean of `survey_ratings`, 0 when the agent has no rated calls
    pub avg_survey_rating: f64,
}

/// Aggregate analytics for a call-center dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallCenterAnalytics {
    pub direction_distribution: HashMap<String, usize>,
    pub call_result_distribution: HashMap<String, usize>,
    pub agent_distribution: HashMap<String, usize>,
    pub queue_distribution: HashMap<String, usize>,
    pub rating_distribution: HashMap<String, usize>,

    pub total_calls: usize,
    pub inbound_calls: usize,
    pub outbound_calls: usize,
    pub abandoned_calls: usize,
    pub lost_in_ivr_calls: usize,

    pub avg_talk_time: f64,
    pub avg_time_in_queue: f64,
    pub avg_on_hold_duration: f64,
    pub avg_survey_rating: f64,

    /// Percentage of calls with at least one associated repeat call
    pub repeat_call_rate_pct: f64,

    pub agent_performance: HashMap<String, AgentPerformance>,
}

/// Aggregate analytics for a ticket dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketAnalytics {
    pub status_distribution: HashMap<String, usize>,
    pub priority_distribution: HashMap<String, usize>,
    pub issue_type_distribution: HashMap<String, usize>,
    pub rating_distribution: HashMap<String, usize>,

    pub total_tickets: usize,
    pub resolved_tickets: usize,

    pub avg_response_time: f64,
    pub avg_resolution_time: f64,
    pub avg_customer_rating: f64,

    /// Resolved tickets as a percentage of all tickets
    pub resolution_rate_pct: f64,

    /// Tickets rated at or above the satisfaction threshold, percent of all
    pub customer_satisfaction_pct: f64,

    /// Tickets whose recorded first response met the 4h SLA, percent of all
    pub sla_first_response_pct: f64,

    /// Tickets whose recorded resolution met the 24h SLA, percent of all
    pub sla_resolution_pct: f64,
}

/// The aggregate result, shaped by the detected dataset kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analytics {
    CallCenter(CallCenterAnalytics),
    Ticket(TicketAnalytics),
}

impl Analytics {
    pub fn as_call_center(&self) -> Option<&CallCenterAnalytics> {
        match self {
            Analytics::CallCenter(analytics) => Some(analytics),
            Analytics::Ticket(_) => None,
        }
    }

    pub fn as_ticket(&self) -> Option<&TicketAnalytics> {
        match self {
            Analytics::Ticket(analytics) => Some(analytics),
            Analytics::CallCenter(_) => None,
        }
    }
}

/// First and last parseable record dates; both `None` when nothing parses
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Aggregate a call-center record sequence
pub fn aggregate_calls(records: &[CallRecord]) -> CallCenterAnalytics {
    let mut analytics = CallCenterAnalytics {
        total_calls: records.len(),
        ..Default::default()
    };
    let mut repeat_calls = 0;

    for record in records {
        bump(&mut analytics.direction_distribution, &record.direction);
        bump(&mut analytics.call_result_distribution, &record.call_result);
        bump(&mut analytics.agent_distribution, &record.agent);
        bump(&mut analytics.queue_distribution, &record.queue);
        bump(
            &mut analytics.rating_distribution,
            &format_rating(record.survey_rating),
        );

        let direction = Direction::parse(&record.direction);
        match direction {
            Direction::Inbound => analytics.inbound_calls += 1,
            Direction::Outbound => analytics.outbound_calls += 1,
            Direction::Unknown => {}
        }

        if record.abandoned {
            analytics.abandoned_calls += 1;
        }
        if record.lost_in_ivr {
            analytics.lost_in_ivr_calls += 1;
        }
        if record.repeats > 0 {
            repeat_calls += 1;
        }

        let agent = analytics
            .agent_performance
            .entry(record.agent.clone())
            .or_default();
        agent.total_calls += 1;
        agent.total_talk_time += record.talk_time;
        match direction {
            Direction::Inbound => agent.inbound_calls += 1,
            Direction::Outbound => agent.outbound_calls += 1,
            Direction::Unknown => {}
        }
        if record.survey_rating > 0.0 {
            agent.survey_ratings.push(record.survey_rating);
        }
    }

    for agent in analytics.agent_performance.values_mut() {
        // Agent averages divide by the agent's own call count, not the
        // positive-value subset used for the global averages.
        agent.avg_talk_time = agent.total_talk_time / agent.total_calls as f64;
        agent.avg_survey_rating = mean(&agent.survey_ratings);
    }

    analytics.avg_talk_time = mean_positive(records.iter().map(|r| r.talk_time));
    analytics.avg_time_in_queue = mean_positive(records.iter().map(|r| r.time_in_queue));
    analytics.avg_on_hold_duration = mean_positive(records.iter().map(|r| r.on_hold_duration));
    analytics.avg_survey_rating = mean_positive(records.iter().map(|r| r.survey_rating));
    analytics.repeat_call_rate_pct = percentage(repeat_calls, records.len());

    analytics
}

/// Aggregate a ticket record sequence
pub fn aggregate_tickets(records: &[TicketRecord]) -> TicketAnalytics {
    let mut analytics = TicketAnalytics {
        total_tickets: records.len(),
        ..Default::default()
    };
    let mut satisfied = 0;
    let mut responses_in_sla = 0;
    let mut resolutions_in_sla = 0;

    for record in records {
        bump(&mut analytics.status_distribution, record.status.as_str());
        bump(
            &mut analytics.priority_distribution,
            record.priority.as_str(),
        );
        bump(&mut analytics.issue_type_distribution, &record.issue_type);
        bump(
            &mut analytics.rating_distribution,
            &format_rating(record.customer_rating),
        );

        if record.status == Status::Resolved {
            analytics.resolved_tickets += 1;
        }
        if record.customer_rating >= SATISFACTION_THRESHOLD {
            satisfied += 1;
        }
        if record.response_time > 0.0 && record.response_time <= SLA_FIRST_RESPONSE_HOURS {
            responses_in_sla += 1;
        }
        if record.resolution_time > 0.0 && record.resolution_time <= SLA_RESOLUTION_HOURS {
            resolutions_in_sla += 1;
        }
    }

    analytics.avg_response_time = mean_positive(records.iter().map(|r| r.response_time));
    analytics.avg_resolution_time = mean_positive(records.iter().map(|r| r.resolution_time));
    analytics.avg_customer_rating = mean_positive(records.iter().map(|r| r.customer_rating));

    analytics.resolution_rate_pct = percentage(analytics.resolved_tickets, records.len());
    analytics.customer_satisfaction_pct = percentage(satisfied, records.len());
    analytics.sla_first_response_pct = percentage(responses_in_sla, records.len());
    analytics.sla_resolution_pct = percentage(resolutions_in_sla, records.len());

    analytics
}

/// Compute the first/last parseable date over record date cells.
///
/// Unparseable dates are discarded; when none parse, both bounds are `None`.
pub fn compute_date_range<'a>(dates: impl Iterator<Item = &'a str>) -> DateRange {
    let mut parsed: Vec<DateTime<Utc>> = dates.filter_map(parse_flexible_date).collect();
    parsed.sort();

    DateRange {
        start: parsed.first().copied(),
        end: parsed.last().copied(),
    }
}

// =============================================================================
// Fold Helpers
// =============================================================================

/// Increment a frequency counter, filing blank keys under the unknown bucket
fn bump(distribution: &mut HashMap<String, usize>, key: &str) {
    let key = if key.is_empty() { UNKNOWN_KEY } else { key };
    *distribution.entry(key.to_string()).or_insert(0) += 1;
}

/// Distribution key for a rating value ("0", "4", "4.5")
fn format_rating(rating: f64) -> String {
    format!("{}", rating)
}

/// Mean over the strictly-positive subset; 0 when the subset is empty
fn mean_positive(values: impl Iterator<Item = f64>) -> f64 {
    let positive: Vec<f64> = values.filter(|v| *v > 0.0).collect();
    mean(&positive)
}

/// Plain mean; 0 for an empty slice
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// `matching / total × 100`, 0 when the dataset is empty
fn percentage(matching: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matching as f64 / total as f64 * 100.0
    }
}
