//! Leaseload CLI - query tenant-lease CSV data
//!
//! # Commands
//!
//! ```bash
//! leaseload query leases.csv       # Load the CSV, then answer queries interactively
//! leaseload parse leases.csv       # Just parse the CSV to JSON
//! ```

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use leaseload::{load_file, run_repl, ReplOptions};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "leaseload")]
#[command(about = "Query tenant-lease data from a CSV export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a CSV file and answer queries interactively
    Query {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// How many records the top-by-rent listing (1b) shows
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Lease length in years matched by 2a/2b
        #[arg(long, default_value = "25")]
        lease_years: f64,

        /// Exclusive lower bound of the 4a lease-start window (YYYY-MM-DD)
        #[arg(long, default_value = "1999-06-01")]
        range_start: NaiveDate,

        /// Exclusive upper bound of the 4a lease-start window (YYYY-MM-DD)
        #[arg(long, default_value = "2007-08-31")]
        range_end: NaiveDate,
    },

    /// Parse a CSV file and output its records as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            input,
            delimiter,
            limit,
            lease_years,
            range_start,
            range_end,
        } => {
            let opts = ReplOptions {
                top_limit: limit,
                lease_years,
                range_start,
                range_end,
            };
            cmd_query(&input, delimiter, &opts)
        }

        Commands::Parse {
            input,
            delimiter,
            output,
        } => cmd_parse(&input, delimiter, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_query(
    input: &Path,
    delimiter: Option<char>,
    opts: &ReplOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_and_report(input, delimiter)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(stdin.lock(), &mut stdout.lock(), &loaded.set, opts)?;

    Ok(())
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_and_report(input, delimiter)?;

    let json = serde_json::to_string_pretty(&loaded.set.records)?;
    write_output(&json, output)?;

    Ok(())
}

fn load_and_report(
    input: &Path,
    delimiter: Option<char>,
) -> Result<leaseload::LoadResult, Box<dyn std::error::Error>> {
    eprintln!("📄 Loading CSV: {}", input.display());

    let loaded = load_file(input, delimiter)?;

    eprintln!("   Encoding: {}", loaded.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        format_delimiter(loaded.delimiter),
        if delimiter.is_none() { " (auto-detected)" } else { "" }
    );
    eprintln!("   Columns: {}", loaded.set.headers.join(", "));
    eprintln!("✅ Loaded {} records", loaded.set.len());

    Ok(loaded)
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
