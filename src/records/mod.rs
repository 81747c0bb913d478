//! Domain types for tenant-lease data.
//!
//! A [`Record`] is one tenant-lease entry: a mapping from column name to the
//! raw string value read from the CSV. Values keep their string form at load
//! time; numeric and date fields are parsed lazily by the accessors here and
//! by the query functions in [`crate::query`].
//!
//! A [`RecordSet`] bundles the records with the header row, preserving the
//! column order of the source file for display.

use crate::error::{QueryError, QueryResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Well-Known Columns
// =============================================================================

/// Column names of the standard tenant-lease export.
pub mod fields {
    pub const PROPERTY_NAME: &str = "Property Name";
    pub const UNIT_NAME: &str = "Unit Name";
    pub const TENANT_NAME: &str = "Tenant Name";
    pub const LEASE_START_DATE: &str = "Lease Start Date";
    pub const LEASE_END_DATE: &str = "Lease End Date";
    pub const LEASE_YEARS: &str = "Lease Years";
    pub const CURRENT_RENT: &str = "Current Rent";
}

// =============================================================================
// Record
// =============================================================================

/// One tenant-lease entry with named string fields.
///
/// Immutable once built: the loader creates records at startup and queries
/// only ever borrow them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Build a record by zipping headers with row values.
    ///
    /// Missing trailing values become empty strings; extra values beyond the
    /// header count are ignored.
    pub fn from_row(headers: &[String], values: &[String]) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let value = values.get(i).cloned().unwrap_or_default();
                (h.clone(), value)
            })
            .collect();
        Self { fields }
    }

    /// Raw value of a field, if present.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Raw value of a field, failing with [`QueryError::MissingField`] when
    /// the column is absent from this record.
    pub fn get(&self, field: &str) -> QueryResult<&str> {
        self.value(field)
            .ok_or_else(|| QueryError::MissingField(field.to_string()))
    }

    /// Parse a field as a floating-point number.
    pub fn numeric(&self, field: &str) -> QueryResult<f64> {
        let raw = self.get(field)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| QueryError::NotNumeric {
                field: field.to_string(),
                value: raw.to_string(),
            })
    }

    /// Number of fields in this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// =============================================================================
// RecordSet
// =============================================================================

/// The loaded CSV: header row in source order plus all data records.
///
/// Invariant: every record carries exactly the header's keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSet {
    /// Column headers in file order.
    pub headers: Vec<String>,
    /// Data records in file order.
    pub records: Vec<Record>,
}

impl RecordSet {
    /// Number of data records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no data rows were loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec!["Unit Name".into(), "Current Rent".into()]
    }

    #[test]
    fn test_from_row_zips_headers() {
        let rec = Record::from_row(&headers(), &["Unit 1".into(), "9050.34".into()]);
        assert_eq!(rec.value("Unit Name"), Some("Unit 1"));
        assert_eq!(rec.value("Current Rent"), Some("9050.34"));
    }

    #[test]
    fn test_from_row_pads_short_rows() {
        let rec = Record::from_row(&headers(), &["Unit 1".into()]);
        assert_eq!(rec.value("Current Rent"), Some(""));
        assert_eq!(rec.len(), 2);
    }

    #[test]
    fn test_from_row_ignores_extra_values() {
        let rec = Record::from_row(&headers(), &["a".into(), "b".into(), "c".into()]);
        assert_eq!(rec.len(), 2);
    }

    #[test]
    fn test_get_missing_field() {
        let rec = Record::from_row(&headers(), &["Unit 1".into(), "100".into()]);
        assert_eq!(
            rec.get("Tenant Name"),
            Err(QueryError::MissingField("Tenant Name".into()))
        );
    }

    #[test]
    fn test_numeric_parses_float() {
        let rec = Record::from_row(&headers(), &["Unit 1".into(), " 9050.34 ".into()]);
        assert_eq!(rec.numeric("Current Rent"), Ok(9050.34));
    }

    #[test]
    fn test_numeric_rejects_garbage() {
        let rec = Record::from_row(&headers(), &["Unit 1".into(), "n/a".into()]);
        assert_eq!(
            rec.numeric("Current Rent"),
            Err(QueryError::NotNumeric {
                field: "Current Rent".into(),
                value: "n/a".into(),
            })
        );
    }

    #[test]
    fn test_record_json_is_flat_object() {
        let rec = Record::from_row(&headers(), &["Unit 1".into(), "100".into()]);
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"Unit Name\":\"Unit 1\""));
    }
}
