//! Error types for the leaseload query tool.
//!
//! Two error families cover the two phases of the tool's life:
//!
//! - [`CsvError`] - loading the CSV file into records
//! - [`QueryError`] - running a query against loaded records
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Loading Errors
// =============================================================================

/// Errors while loading a CSV file into records.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode the file's byte content.
    #[error("Failed to decode content as {0}")]
    Encoding(String),

    /// Malformed CSV content.
    #[error("Invalid CSV format: {0}")]
    Malformed(#[from] csv::Error),

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors while evaluating a query against loaded records.
///
/// A query either fully succeeds or fails with the first bad value it
/// encounters; there are no partial results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A field expected to hold a number holds something else.
    #[error("Field '{field}' has non-numeric value '{value}'")]
    NotNumeric { field: String, value: String },

    /// A date string does not match the lease date format ("26 Jul 2007").
    #[error("Malformed date '{value}': expected day, abbreviated month, year")]
    MalformedDate { value: String },

    /// A requested field name is absent from a record.
    #[error("Record is missing field '{0}'")]
    MissingField(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV loading.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for query evaluation.
pub type QueryResult<T> = Result<T, QueryError>;
