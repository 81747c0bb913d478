//! Interactive query loop.
//!
//! Reads short command codes from the user and dispatches them through a
//! static table mapping each code to a query invocation:
//!
//! | Code | Query                                                    |
//! |------|----------------------------------------------------------|
//! | `1a` | all tenants sorted by current rent, highest first        |
//! | `1b` | top tenants by current rent (configurable count)         |
//! | `2a` | tenants with the configured lease length                 |
//! | `2b` | total rent over the `2a` selection                       |
//! | `4a` | leases starting inside the configured date range         |
//!
//! A failing query is reported and the loop keeps going; only `exit` (or
//! end of input) leaves the loop. Reader and writer are generic so tests
//! can drive the loop with in-memory buffers.

use crate::error::QueryResult;
use crate::query::{
    filter_by_date_field_in_range, filter_by_exact_numeric_value, reformat_date,
    sort_by_numeric_field, sum_numeric_field, SortDirection,
};
use crate::records::{fields, Record, RecordSet};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

// =============================================================================
// Options
// =============================================================================

/// Tunable parameters of the canned queries.
#[derive(Debug, Clone)]
pub struct ReplOptions {
    /// How many records the `1b` top listing shows.
    pub top_limit: usize,
    /// Lease length (in years) matched by `2a` and `2b`.
    pub lease_years: f64,
    /// Exclusive lower bound of the `4a` lease-start window.
    pub range_start: NaiveDate,
    /// Exclusive upper bound of the `4a` lease-start window.
    pub range_end: NaiveDate,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            top_limit: 5,
            lease_years: 25.0,
            range_start: NaiveDate::from_ymd_opt(1999, 6, 1).expect("valid date"),
            range_end: NaiveDate::from_ymd_opt(2007, 8, 31).expect("valid date"),
        }
    }
}

// =============================================================================
// Dispatch Table
// =============================================================================

/// One canned query behind a command code.
#[derive(Debug, Clone, Copy)]
enum Action {
    SortByRent { limited: bool },
    LeasesOfLength,
    TotalRent,
    LeaseStartsInRange,
}

/// Command code, menu description, query.
const COMMANDS: &[(&str, &str, Action)] = &[
    (
        "1a",
        "All tenants sorted by current rent (highest first)",
        Action::SortByRent { limited: false },
    ),
    (
        "1b",
        "Top tenants by current rent",
        Action::SortByRent { limited: true },
    ),
    (
        "2a",
        "Tenants with the configured lease length",
        Action::LeasesOfLength,
    ),
    (
        "2b",
        "Total rent of tenants with the configured lease length",
        Action::TotalRent,
    ),
    (
        "4a",
        "Leases starting within the configured date range",
        Action::LeaseStartsInRange,
    ),
];

// =============================================================================
// Loop
// =============================================================================

/// Run the interactive loop until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    set: &RecordSet,
    opts: &ReplOptions,
) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        print_menu(out)?;
        write!(out, ">>")?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let code = line.trim();

        if code.is_empty() {
            continue;
        }
        if code == "exit" {
            break;
        }

        match COMMANDS.iter().find(|(c, _, _)| *c == code) {
            Some((_, _, action)) => match dispatch(*action, set, opts) {
                Ok(rendered) => write!(out, "{rendered}")?,
                Err(e) => writeln!(out, "Query failed: {e}")?,
            },
            None => writeln!(out, "Unknown option '{code}'")?,
        }
    }

    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "What data do you need?")?;
    let codes: Vec<&str> = COMMANDS.iter().map(|(c, _, _)| *c).collect();
    writeln!(out, "Options are: {}", codes.join(", "))?;
    for (code, description, _) in COMMANDS {
        writeln!(out, "  {code}  {description}")?;
    }
    writeln!(out, "Type 'exit' to exit")
}

// =============================================================================
// Query Execution
// =============================================================================

/// Run one canned query and render its output.
///
/// Rendering is separated from I/O so a failing query produces no partial
/// output.
fn dispatch(action: Action, set: &RecordSet, opts: &ReplOptions) -> QueryResult<String> {
    match action {
        Action::SortByRent { limited } => {
            let limit = limited.then_some(opts.top_limit);
            let sorted = sort_by_numeric_field(
                &set.records,
                fields::CURRENT_RENT,
                SortDirection::Descending,
                limit,
            )?;
            Ok(render_records(&set.headers, &sorted))
        }

        Action::LeasesOfLength => {
            let kept =
                filter_by_exact_numeric_value(&set.records, fields::LEASE_YEARS, opts.lease_years)?;
            Ok(render_records(&set.headers, &kept))
        }

        Action::TotalRent => {
            let kept =
                filter_by_exact_numeric_value(&set.records, fields::LEASE_YEARS, opts.lease_years)?;
            let total = sum_numeric_field(&kept, fields::CURRENT_RENT)?;
            Ok(format!("Total rent: {total}\n"))
        }

        Action::LeaseStartsInRange => {
            let kept = filter_by_date_field_in_range(
                &set.records,
                fields::LEASE_START_DATE,
                opts.range_start,
                opts.range_end,
            )?;

            let mut rendered = String::new();
            for record in &kept {
                let start = reformat_date(record.get(fields::LEASE_START_DATE)?)?;
                let end = reformat_date(record.get(fields::LEASE_END_DATE)?)?;
                rendered.push_str(&format!(
                    "{} {} -- Start: {} End: {}\n",
                    record.value(fields::UNIT_NAME).unwrap_or(""),
                    record.value(fields::TENANT_NAME).unwrap_or(""),
                    start,
                    end,
                ));
            }
            Ok(rendered)
        }
    }
}

/// Render records as `Header: value` lines in header order, one blank line
/// between records.
fn render_records(headers: &[String], records: &[Record]) -> String {
    let mut rendered = String::new();
    for record in records {
        for header in headers {
            rendered.push_str(header);
            rendered.push_str(": ");
            rendered.push_str(record.value(header).unwrap_or(""));
            rendered.push('\n');
        }
        rendered.push('\n');
    }
    rendered
}

// =============================================================================
// Tests
// =============================================================================
