//! Error taxonomy for loading and reporting.
//!
//! Each failure is raised as the most specific kind at the point of
//! detection; the CLI boundary translates kinds into messages and exit
//! codes. Argument validation never reaches this enum (clap handles it
//! before any file I/O runs).

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input path did not resolve to a file.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The header record of the file has zero non-empty fields.
    #[error("CSV file '{}' has no headers", .path.display())]
    NoHeaders { path: PathBuf },

    /// Malformed CSV syntax, including ragged rows.
    #[error("Error parsing CSV file '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Zero data rows remain after skipping blank rows.
    #[error("No data found in file '{}'", .path.display())]
    EmptyDataset { path: PathBuf },

    /// A row lacks a column the reporter requires.
    #[error("CSV must contain {required} columns")]
    Schema { required: &'static str },

    /// A required column is present but its cell cannot be parsed.
    #[error("Invalid {column} value: {value}")]
    InvalidValue { column: &'static str, value: String },

    /// Report name missing from the registry.
    #[error("Unknown report '{name}'. Available reports: {available}")]
    UnknownReport { name: String, available: String },

    /// Combined multi-file load failure, one message per failing path,
    /// in input order.
    #[error("{}", .failures.join("\n"))]
    Aggregate { failures: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_joins_failures_one_per_line() {
        let e = Error::Aggregate {
            failures: vec![
                "File not found: a.csv".into(),
                "Error reading b.csv: bad".into(),
            ],
        };
        assert_eq!(
            e.to_string(),
            "File not found: a.csv\nError reading b.csv: bad"
        );
    }

    #[test]
    fn invalid_value_names_the_offending_literal() {
        let e = Error::InvalidValue {
            column: "GDP",
            value: "not_a_number".into(),
        };
        assert_eq!(e.to_string(), "Invalid GDP value: not_a_number");
    }
}
