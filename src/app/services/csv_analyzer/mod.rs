//! CSV analyzer for contact-center and helpdesk exports
//!
//! This module provides the analysis pipeline that turns a raw delimited
//! export into normalized records plus aggregate analytics. The design keeps
//! each stage a pure function of its input so stages can be tested in
//! isolation and concurrent invocations never share state.
//!
//! ## Architecture
//!
//! The pipeline is organized into logical components:
//! - [`tabular`] - Strict line/comma splitting into header-keyed rows
//! - [`schema`] - Dataset kind detection from indicator headers
//! - [`column_map`] - Canonical field resolution over alias tables
//! - [`field_parsers`] - Total conversion functions for raw cells
//! - [`record_builder`] - Per-row assembly of normalized records
//! - [`analytics`] - Single-pass aggregation over the record sequence
//! - [`stats`] - Processing statistics and result structures
//! - [`processor`] - Pipeline orchestration and file handling
//!
//! ## Usage
//!
//! ```rust
//! use contact_processor::app::services::csv_analyzer::CsvProcessor;
//!
//! # fn example() -> contact_processor::Result<()> {
//! let processor = CsvProcessor::new();
//! let text = "Agent,Direction,Call Result,Talk Time,Queue\nAlice,Inbound,Resolved,0:05:30,Support\n";
//!
//! if let Some(result) = processor.process_text(text)? {
//!     println!(
//!         "Processed {} records ({} data)",
//!         result.processed_data.len(),
//!         result.data_type
//!     );
//! }
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod column_map;
pub mod field_parsers;
pub mod processor;
pub mod record_builder;
pub mod schema;
pub mod stats;
pub mod tabular;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use analytics::{AgentPerformance, Analytics, CallCenterAnalytics, DateRange, TicketAnalytics};
pub use column_map::ColumnMap;
pub use processor::CsvProcessor;
pub use stats::{ParseStats, ProcessingResult, Summary};
pub use tabular::RawTable;
