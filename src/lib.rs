//! Contact Processor Library
//!
//! A Rust library for converting loosely-structured contact-center and
//! helpdesk CSV exports into normalized record sets and aggregate analytics.
//!
//! This library provides tools for:
//! - Parsing delimited text exports with a strict, auditable splitter
//! - Detecting whether a dataset describes call-center activity or tickets
//! - Resolving canonical fields from prioritized header-alias tables
//! - Normalizing mixed time formats, priorities, statuses, and ratings
//! - Aggregating distributions, averages, per-agent rollups, and SLA metrics
//! - Comprehensive error handling with user-facing column diagnostics

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_analyzer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CallRecord, DatasetKind, Direction, Priority, Status, TicketRecord};
pub use app::services::csv_analyzer::{
    Analytics, CsvProcessor, ParseStats, ProcessingResult, Summary,
};

/// Result type alias for the contact processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for contact data processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input text is not a usable delimited export
    #[error("Invalid export format: {message}")]
    InvalidFormat { message: String },

    /// Required canonical columns could not be resolved from the header set.
    ///
    /// The rendered message enumerates every missing canonical field and every
    /// header actually present; downstream surfaces match on the
    /// "Missing required columns" prefix, so the wording is load-bearing.
    #[error(
        "Missing required columns for {dataset} data: {}. Columns found: {}",
        .missing.join(", "),
        .found.join(", ")
    )]
    MissingColumns {
        dataset: String,
        missing: Vec<String>,
        found: Vec<String>,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create a missing columns error
    pub fn missing_columns(
        dataset: impl Into<String>,
        missing: Vec<String>,
        found: Vec<String>,
    ) -> Self {
        Self::MissingColumns {
            dataset: dataset.into(),
            missing,
            found,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
