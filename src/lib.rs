//! # Leaseload - tenant-lease CSV query tool
//!
//! Leaseload loads a tenant-lease CSV export into memory and answers ad-hoc
//! queries against it: sort by rent, filter by lease length, filter by
//! lease-start date range, total rents, reformat dates.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Loader    │────▶│   Records   │────▶│   Queries   │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │ (in memory) │     │ (pure fns)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leaseload::{load_file, sort_by_numeric_field, SortDirection, fields};
//!
//! let loaded = load_file("leases.csv", None)?;
//! let top = sort_by_numeric_field(
//!     &loaded.set.records,
//!     fields::CURRENT_RENT,
//!     SortDirection::Descending,
//!     Some(5),
//! )?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - error types for loading and querying
//! - [`records`] - Record / RecordSet domain types
//! - [`loader`] - CSV loading with encoding and delimiter auto-detection
//! - [`query`] - pure query functions (the core)
//! - [`repl`] - interactive command loop

// Core modules
pub mod error;
pub mod records;

// Loading
pub mod loader;

// Queries
pub mod query;

// Interactive loop
pub mod repl;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, CsvResult, QueryError, QueryResult};

// =============================================================================
// Re-exports - Records
// =============================================================================

pub use records::{fields, Record, RecordSet};

// =============================================================================
// Re-exports - Loader
// =============================================================================

pub use loader::{
    decode_content, detect_delimiter, detect_encoding, load_bytes, load_file, parse_records,
    LoadResult,
};

// =============================================================================
// Re-exports - Queries
// =============================================================================

pub use query::{
    date_in_open_range, filter_by_date_field_in_range, filter_by_exact_numeric_value,
    parse_lease_date, reformat_date, sort_by_numeric_field, sum_numeric_field, SortDirection,
    LEASE_DATE_FORMAT,
};

// =============================================================================
// Re-exports - Repl
// =============================================================================

pub use repl::{run as run_repl, ReplOptions};
