//! Tests for the aggregation pass

use crate::app::models::{CallRecord, Priority, Status, TicketRecord};
use crate::app::services::csv_analyzer::analytics::{
    aggregate_calls, aggregate_tickets, compute_date_range,
};

fn call(agent: &str, direction: &str, talk_time: f64, rating: f64) -> CallRecord {
    CallRecord {
        id: "C-001".to_string(),
        direction: direction.to_string(),
        agent: agent.to_string(),
        call_result: "Resolved".to_string(),
        talk_time,
        queue: "Support".to_string(),
        start_date: "2024-03-01 09:00:00".to_string(),
        time_in_queue: 0.0,
        abandoned: false,
        lost_in_ivr: false,
        survey_rating: rating,
        on_hold_duration: 0.0,
        repeats: 0,
    }
}

fn ticket(status: Status, response: f64, resolution: f64, rating: f64) -> TicketRecord {
    TicketRecord {
        id: "T-001".to_string(),
        customer_name: "Acme".to_string(),
        issue_type: "Billing".to_string(),
        priority: Priority::Medium,
        status,
        response_time: response,
        resolution_time: resolution,
        customer_rating: rating,
        created_at: "2024-02-01".to_string(),
        assigned_to: "Unassigned".to_string(),
        category: "General".to_string(),
        tags: vec![],
    }
}

#[test]
fn test_distribution_sums_equal_record_count() {
    let records = vec![
        call("Alice", "Inbound", 0.5, 5.0),
        call("Alice", "Outbound", 0.25, 0.0),
        call("Bob", "Transfer", 0.0, 4.0),
    ];
    let analytics = aggregate_calls(&records);

    for distribution in [
        &analytics.direction_distribution,
        &analytics.call_result_distribution,
        &analytics.agent_distribution,
        &analytics.queue_distribution,
        &analytics.rating_distribution,
    ] {
        assert_eq!(distribution.values().sum::<usize>(), records.len());
    }
}

#[test]
fn test_direction_counts_use_canonical_vocabulary() {
    let records = vec![
        call("Alice", "Inbound", 0.5, 0.0),
        call("Alice", "out", 0.25, 0.0),
        // Contains "in" but is not a direction; must not count as inbound
        call("Bob", "Internal Transfer", 0.1, 0.0),
    ];
    let analytics = aggregate_calls(&records);

    assert_eq!(analytics.total_calls, 3);
    assert_eq!(analytics.inbound_calls, 1);
    assert_eq!(analytics.outbound_calls, 1);
    assert!(analytics.inbound_calls + analytics.outbound_calls <= analytics.total_calls);
}

#[test]
fn test_averages_ignore_zero_values() {
    let records = vec![
        call("Alice", "Inbound", 2.0, 4.0),
        call("Alice", "Inbound", 1.0, 0.0),
        call("Bob", "Inbound", 0.0, 5.0),
    ];
    let analytics = aggregate_calls(&records);

    // Zero talk time is excluded from the denominator
    assert!((analytics.avg_talk_time - 1.5).abs() < 1e-9);
    // Unrated calls are excluded from the rating average
    assert!((analytics.avg_survey_rating - 4.5).abs() < 1e-9);
}

#[test]
fn test_empty_dataset_yields_zeroed_analytics() {
    let analytics = aggregate_calls(&[]);

    assert_eq!(analytics.total_calls, 0);
    assert_eq!(analytics.avg_talk_time, 0.0);
    assert_eq!(analytics.repeat_call_rate_pct, 0.0);
    assert!(analytics.agent_performance.is_empty());
}

#[test]
fn test_agent_rollup_uses_own_call_count() {
    let mut first = call("Alice", "Inbound", 2.0, 5.0);
    first.repeats = 1;
    let records = vec![
        first,
        call("Alice", "Inbound", 0.0, 0.0),
        call("Bob", "Outbound", 1.0, 3.0),
    ];
    let analytics = aggregate_calls(&records);

    let alice = &analytics.agent_performance["Alice"];
    assert_eq!(alice.total_calls, 2);
    assert_eq!(alice.inbound_calls, 2);
    assert_eq!(alice.outbound_calls, 0);
    // Divides by the agent's own total, including the zero-duration call
    assert!((alice.avg_talk_time - 1.0).abs() < 1e-9);
    // Rated calls only
    assert_eq!(alice.survey_ratings, vec![5.0]);
    assert!((alice.avg_survey_rating - 5.0).abs() < 1e-9);

    let bob = &analytics.agent_performance["Bob"];
    assert_eq!(bob.total_calls, 1);
    assert_eq!(bob.outbound_calls, 1);

    // One of three calls had a repeat
    assert!((analytics.repeat_call_rate_pct - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_abandoned_and_ivr_counting() {
    let mut abandoned = call("Alice", "Inbound", 0.0, 0.0);
    abandoned.abandoned = true;
    let mut lost = call("Bob", "Inbound", 0.0, 0.0);
    lost.lost_in_ivr = true;

    let analytics = aggregate_calls(&[abandoned, lost]);
    assert_eq!(analytics.abandoned_calls, 1);
    assert_eq!(analytics.lost_in_ivr_calls, 1);
}

#[test]
fn test_ticket_resolution_and_satisfaction_rates() {
    let records = vec![
        ticket(Status::Resolved, 1.0, 10.0, 5.0),
        ticket(Status::Resolved, 2.0, 30.0, 4.0),
        ticket(Status::Pending, 0.0, 0.0, 2.0),
        ticket(Status::InProgress, 6.0, 0.0, 0.0),
    ];
    let analytics = aggregate_tickets(&records);

    assert_eq!(analytics.total_tickets, 4);
    assert_eq!(analytics.resolved_tickets, 2);
    assert!((analytics.resolution_rate_pct - 50.0).abs() < 1e-9);
    // Two of four rated at or above the threshold
    assert!((analytics.customer_satisfaction_pct - 50.0).abs() < 1e-9);
}

#[test]
fn test_ticket_sla_compliance() {
    let records = vec![
        // Within both SLAs
        ticket(Status::Resolved, 1.0, 10.0, 5.0),
        // First response too slow, resolution inside 24h
        ticket(Status::Resolved, 6.0, 20.0, 4.0),
        // Response inside 4h, resolution too slow
        ticket(Status::Resolved, 2.0, 48.0, 3.0),
        // Nothing recorded counts as out of SLA
        ticket(Status::Pending, 0.0, 0.0, 0.0),
    ];
    let analytics = aggregate_tickets(&records);

    assert!((analytics.sla_first_response_pct - 50.0).abs() < 1e-9);
    assert!((analytics.sla_resolution_pct - 50.0).abs() < 1e-9);
}

#[test]
fn test_ticket_averages_use_filtered_denominators() {
    let records = vec![
        ticket(Status::Resolved, 2.0, 12.0, 4.0),
        ticket(Status::Pending, 0.0, 0.0, 0.0),
    ];
    let analytics = aggregate_tickets(&records);

    assert!((analytics.avg_response_time - 2.0).abs() < 1e-9);
    assert!((analytics.avg_resolution_time - 12.0).abs() < 1e-9);
    assert!((analytics.avg_customer_rating - 4.0).abs() < 1e-9);
}

#[test]
fn test_date_range_discards_unparseable_dates() {
    let dates = ["2024-03-05", "not a date", "2024-03-01 08:00:00", ""];
    let range = compute_date_range(dates.iter().copied());

    let start = range.start.unwrap();
    let end = range.end.unwrap();
    assert!(start < end);
    assert_eq!(start.to_rfc3339(), "2024-03-01T08:00:00+00:00");
    assert_eq!(end.to_rfc3339(), "2024-03-05T00:00:00+00:00");
}

#[test]
fn test_date_range_empty_when_nothing_parses() {
    let range = compute_date_range(["soon", ""].iter().copied());
    assert!(range.start.is_none());
    assert!(range.end.is_none());
}

#[test]
fn test_rating_distribution_keys() {
    let records = vec![
        call("Alice", "Inbound", 1.0, 4.0),
        call("Alice", "Inbound", 1.0, 4.5),
        call("Bob", "Inbound", 1.0, 0.0),
    ];
    let analytics = aggregate_calls(&records);

    assert_eq!(analytics.rating_distribution["4"], 1);
    assert_eq!(analytics.rating_distribution["4.5"], 1);
    assert_eq!(analytics.rating_distribution["0"], 1);
}
