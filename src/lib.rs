//! Weather Filter Library
//!
//! A Rust library for filtering weather station observation records
//! from CSV files by a minimum temperature threshold.
//!
//! This library provides tools for:
//! - Loading header-plus-rows CSV files into in-memory records
//! - Auto-detecting which column holds temperature observations
//! - Filtering records against an inclusive minimum threshold
//! - Writing surviving records with the original column order preserved
//! - Appending a structured audit line summarising each run

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod audit_log;
        pub mod csv_table;
        pub mod field_detection;
        pub mod record_filter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CellValue, FilterResult, FilterStats, Record};
pub use config::RunConfig;

/// Result type alias for the weather filter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for weather filtering operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing or writing error
    #[error("CSV error in file '{file}': {message}")]
    Csv {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Input file does not exist
    #[error("input file does not exist: {path}")]
    InputNotFound { path: String },

    /// No temperature field could be inferred and none was supplied
    #[error("could not determine temperature field. Use --temp-field")]
    FieldUndetermined,

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

    /// Create a CSV error with context
    pub fn csv(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::Csv {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    ///
    /// The two validation failures (missing input, undetermined temperature
    /// field) exit with status 2; anything else is a generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } | Self::FieldUndetermined => 2,
            _ => 1,
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

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            file: "unknown".to_string(),
            message: "CSV processing failed".to_string(),
            source: Some(error),
        }
    }
}
