//! Test fixtures and helpers for the CSV analyzer
//!
//! This module provides common export fixtures used across the different
//! test modules.

// Test modules
mod analytics_tests;
mod field_parser_tests;

/// A well-formed call-center export with two data rows
pub fn create_call_center_csv() -> String {
    "Call ID,Direction,Agent,Call Result,Talk Time,Queue\n\
     C100,Inbound,Alice,Resolved,0:05:30,Support\n\
     C101,Outbound,Bob,No Answer,2:30,Sales\n"
        .to_string()
}

/// A richer call-center export exercising optional columns
pub fn create_full_call_center_csv() -> String {
    "Call ID,Direction,Agent,Call Result,Talk Time,Queue,Start Date,Wait Time,Abandoned,Lost in IVR,Survey Rating,Hold Time,Repeats\n\
     C100,Inbound,Alice,Resolved,0:05:30,Support,2024-03-01 09:00:00,0:01:00,false,false,5,0:00:30,0\n\
     ,Inbound,Alice,Resolved,0:04:00,Support,2024-03-02 10:15:00,0:02:00,false,false,4,,1\n\
     C102,Outbound,Bob,No Answer,0:00:45,Sales,2024-03-03 11:30:00,,true,false,,,0\n"
        .to_string()
}

/// A well-formed ticket export with three data rows
pub fn create_ticket_csv() -> String {
    "Ticket ID,Customer Name,Issue Type,Priority,Status,Response Time,Resolution Time,Customer Rating,Created At,Tags\n\
     T500,Acme Corp,Billing,critical,closed,2 hours,20 hours,5,2024-02-01,billing; invoice\n\
     ,Globex,Login,normal,open,30 minutes,,4,2024-02-03,access\n\
     T502,Initech,Billing,minor,in progress,6 hours,30 hours,2,2024-02-05,\n"
        .to_string()
}
