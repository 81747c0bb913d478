//! CSV loading with encoding and delimiter auto-detection.
//!
//! Reads a tenant-lease CSV export into a [`RecordSet`]. The file's byte
//! content is decoded according to its detected encoding, the delimiter is
//! sniffed from the header line unless given explicitly, and each data row
//! becomes one [`Record`] keyed by the header row.
//!
//! Rows shorter than the header are padded with empty values; columns beyond
//! the header are dropped. Values stay raw strings, no type coercion here.

use crate::error::{CsvError, CsvResult};
use crate::records::{Record, RecordSet};
use std::path::Path;

/// Result of loading with detection metadata.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Headers and data records.
    pub set: RecordSet,
    /// Detected or assumed encoding.
    pub encoding: String,
    /// Detected or explicitly given delimiter.
    pub delimiter: char,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    match encoding.to_lowercase().as_str() {
        "" | "utf-8" | "utf8" | "ascii" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => {
            Ok(encoding_rs::ISO_8859_15.decode(bytes).0.into_owned())
        }
        "windows-1252" | "cp1252" => Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()),
        other => Err(CsvError::Encoding(other.to_string())),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Load a CSV file with auto-detection of encoding and delimiter.
///
/// # Example
/// ```ignore
/// let result = leaseload::load_file("leases.csv", None)?;
/// println!("Loaded {} records ({})", result.set.len(), result.encoding);
/// ```
pub fn load_file<P: AsRef<Path>>(path: P, delimiter: Option<char>) -> CsvResult<LoadResult> {
    let bytes = std::fs::read(path.as_ref())?;
    load_bytes(&bytes, delimiter)
}

/// Load CSV bytes with auto-detection of encoding and delimiter.
pub fn load_bytes(bytes: &[u8], delimiter: Option<char>) -> CsvResult<LoadResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    let set = parse_records(&content, delimiter)?;

    Ok(LoadResult {
        set,
        encoding,
        delimiter,
    })
}

/// Parse decoded CSV content with an explicit delimiter.
///
/// The first row is the header; every following non-empty row becomes a
/// record carrying exactly the header's keys.
pub fn parse_records(content: &str, delimiter: char) -> CsvResult<RecordSet> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(CsvError::NoHeaders);
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let values: Vec<String> = row.iter().map(str::to_string).collect();
        records.push(Record::from_row(&headers, &values));
    }

    Ok(RecordSet { headers, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_simple_csv() {
        let csv = "Unit Name,Current Rent\nUnit 1,9050.34\nUnit 2,3600.50";
        let set = parse_records(csv, ',').unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.headers, vec!["Unit Name", "Current Rent"]);
        assert_eq!(set.records[0].value("Unit Name"), Some("Unit 1"));
        assert_eq!(set.records[1].value("Current Rent"), Some("3600.50"));
    }

    #[test]
    fn test_quoted_values() {
        let csv = "Tenant Name,Current Rent\n\"Doe, John\",100.00";
        let set = parse_records(csv, ',').unwrap();

        assert_eq!(set.records[0].value("Tenant Name"), Some("Doe, John"));
    }

    #[test]
    fn test_empty_lines_skipped() {
        let csv = "a,b\n1,2\n\n3,4\n";
        let set = parse_records(csv, ',').unwrap();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_short_rows_padded() {
        let csv = "a,b,c\n1";
        let set = parse_records(csv, ',').unwrap();

        assert_eq!(set.records[0].value("a"), Some("1"));
        assert_eq!(set.records[0].value("b"), Some(""));
        assert_eq!(set.records[0].value("c"), Some(""));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "a,b\n1,2,3,4";
        let set = parse_records(csv, ',').unwrap();

        assert_eq!(set.records[0].len(), 2);
    }

    #[test]
    fn test_empty_csv_error() {
        let result = parse_records("", ',');
        assert!(matches!(result, Err(CsvError::EmptyFile)));
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
    }

    #[test]
    fn test_detect_delimiter_pipe() {
        assert_eq!(detect_delimiter("a|b|c\n1|2|3"), '|');
    }

    #[test]
    fn test_load_bytes_auto() {
        let csv = b"Unit Name;Current Rent\nUnit 1;100.00";
        let result = load_bytes(csv, None).unwrap();

        assert_eq!(result.delimiter, ';');
        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.set.len(), 1);
    }

    #[test]
    fn test_explicit_delimiter_wins() {
        // One comma in the header would win the sniff; the caller overrides.
        let csv = b"a;b,c\n1;2";
        let result = load_bytes(csv, Some(';')).unwrap();

        assert_eq!(result.delimiter, ';');
        assert_eq!(result.set.headers[0], "a");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert!(decoded.contains("Soci"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Unit Name,Current Rent\nUnit 1,100.00\n").unwrap();

        let result = load_file(file.path(), None).unwrap();
        assert_eq!(result.set.len(), 1);
        assert_eq!(result.delimiter, ',');
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_file("/no/such/file.csv", None);
        assert!(matches!(result, Err(CsvError::Io(_))));
    }
}
