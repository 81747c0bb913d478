//! Pure query functions over loaded lease records.
//!
//! The core of the tool: sort, filter, aggregate and reformat operations on
//! a borrowed slice of [`Record`]s. Every function is stateless, leaves the
//! input untouched, and either fully succeeds or fails on the first
//! malformed value with a [`QueryError`].
//!
//! Dates use the lease export format `"%d %b %Y"` (e.g. `26 Jul 2007`).

use crate::error::{QueryError, QueryResult};
use crate::records::Record;
use chrono::NaiveDate;

/// Input date format of the lease export.
pub const LEASE_DATE_FORMAT: &str = "%d %b %Y";

/// Zero-padded day/month/year output format.
const READABLE_DATE_FORMAT: &str = "%d/%m/%Y";

// =============================================================================
// Sorting
// =============================================================================

/// Sort direction for [`sort_by_numeric_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Largest value first (the default).
    #[default]
    Descending,
    /// Smallest value first.
    Ascending,
}

/// Sort records by a numeric field, optionally truncating the result.
///
/// Every record's `field` is parsed as `f64` before sorting; a single bad
/// value fails the whole query. The sort is stable, so ties keep their
/// original relative order. With `limit = Some(k)` the result is the
/// unlimited ordering truncated to `min(k, len)` records.
pub fn sort_by_numeric_field(
    records: &[Record],
    field: &str,
    direction: SortDirection,
    limit: Option<usize>,
) -> QueryResult<Vec<Record>> {
    let mut keyed = records
        .iter()
        .map(|r| Ok((r.numeric(field)?, r)))
        .collect::<QueryResult<Vec<(f64, &Record)>>>()?;

    keyed.sort_by(|a, b| match direction {
        SortDirection::Descending => b.0.total_cmp(&a.0),
        SortDirection::Ascending => a.0.total_cmp(&b.0),
    });

    if let Some(limit) = limit {
        keyed.truncate(limit);
    }

    Ok(keyed.into_iter().map(|(_, r)| r.clone()).collect())
}

// =============================================================================
// Filtering
// =============================================================================

/// Keep records whose parsed numeric `field` equals `target` exactly.
///
/// Exact `f64` equality is the documented contract here; the shipped
/// commands only use it on the integer-valued Lease Years column. Original
/// record order is preserved.
pub fn filter_by_exact_numeric_value(
    records: &[Record],
    field: &str,
    target: f64,
) -> QueryResult<Vec<Record>> {
    let mut kept = Vec::new();
    for record in records {
        if record.numeric(field)? == target {
            kept.push(record.clone());
        }
    }
    Ok(kept)
}

/// Keep records whose `field` date lies strictly between `start` and `end`.
pub fn filter_by_date_field_in_range(
    records: &[Record],
    field: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> QueryResult<Vec<Record>> {
    let mut kept = Vec::new();
    for record in records {
        if date_in_open_range(record.get(field)?, start, end)? {
            kept.push(record.clone());
        }
    }
    Ok(kept)
}

// =============================================================================
// Dates
// =============================================================================

/// Parse a lease date string ("26 Jul 2007").
pub fn parse_lease_date(date: &str) -> QueryResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), LEASE_DATE_FORMAT).map_err(|_| {
        QueryError::MalformedDate {
            value: date.to_string(),
        }
    })
}

/// True iff `date` falls strictly inside the open interval (`start`, `end`).
///
/// Both bounds are exclusive: a date equal to either endpoint is outside.
pub fn date_in_open_range(date: &str, start: NaiveDate, end: NaiveDate) -> QueryResult<bool> {
    let parsed = parse_lease_date(date)?;
    Ok(parsed > start && parsed < end)
}

/// Re-render a lease date as zero-padded day/month/year.
///
/// `"10 Jun 2005"` becomes `"10/06/2005"`.
pub fn reformat_date(date: &str) -> QueryResult<String> {
    let parsed = parse_lease_date(date)?;
    Ok(parsed.format(READABLE_DATE_FORMAT).to_string())
}

// =============================================================================
// Aggregation
// =============================================================================

/// Sum the parsed numeric `field` across all records; 0 when empty.
pub fn sum_numeric_field(records: &[Record], field: &str) -> QueryResult<f64> {
    let mut total = 0.0;
    for record in records {
        total += record.numeric(field)?;
    }
    Ok(total)
}

// =============================================================================
// Tests
// =============================================================================
