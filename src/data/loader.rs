use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;

use super::table::Table;

// ---------------------------------------------------------------------------
// Load options and errors
// ---------------------------------------------------------------------------

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// How to interpret a delimited-text file.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Field separator byte.
    pub delimiter: u8,
    /// Whether the first record is a header row.
    pub has_headers: bool,
}

impl LoadOptions {
    /// Spectrum-analyzer marker export: `;`-separated, no header row.
    pub fn semicolon_no_header() -> Self {
        LoadOptions {
            delimiter: b';',
            has_headers: false,
        }
    }

    /// Sweep export: `,`-separated with a header row.
    pub fn comma_with_header() -> Self {
        LoadOptions {
            delimiter: b',',
            has_headers: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("file is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a delimited-text table from disk.
///
/// The file is decoded as UTF-8, tolerating an optional byte-order mark.
/// Rows that do not fit the expected shape are skipped, never fatal; only
/// an unreadable or undecodable file is an error.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table, LoadError> {
    let bytes = std::fs::read(path)?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    let text = std::str::from_utf8(bytes)?;
    Ok(parse_table(text, options))
}

/// Parse delimited text into a [`Table`].
///
/// The expected row width is taken from the header row (or the first record
/// when header-less).  Rows with *more* cells than expected are dropped,
/// matching the source instrument software's "skip bad lines" behaviour;
/// rows with fewer cells are padded with empty cells.
pub fn parse_table(text: &str, options: &LoadOptions) -> Table {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut width: Option<usize> = None;

    for (row_no, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                log::debug!("skipping unreadable row {row_no}: {err}");
                continue;
            }
        };

        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        let expected = *width.get_or_insert(cells.len());

        if options.has_headers && headers.is_none() {
            headers = Some(cells);
            continue;
        }

        if cells.len() > expected {
            log::debug!(
                "skipping row {row_no}: {} cells, expected {expected}",
                cells.len()
            );
            continue;
        }
        cells.resize(expected, String::new());
        rows.push(cells);
    }

    Table::new(headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, bytes).expect("writing temp fixture");
        path
    }

    #[test]
    fn parses_semicolon_table_without_header() {
        let table = parse_table(
            "RF Input;50 Ohm;x\nmarker_1_value_dbm;-10.0;y\n",
            &LoadOptions::semicolon_no_header(),
        );
        assert!(table.headers().is_none());
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][1], "50 Ohm");
    }

    #[test]
    fn parses_comma_table_with_header() {
        let table = parse_table(
            "Time,Sweep (T1)\n0,100\n1,300\n",
            &LoadOptions::comma_with_header(),
        );
        assert_eq!(table.headers().unwrap()[1], "Sweep (T1)");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn rows_wider_than_expected_are_dropped() {
        let table = parse_table(
            "a,b\n1,2\n1,2,3,4\n3,4\n",
            &LoadOptions::comma_with_header(),
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1], vec!["3", "4"]);
    }

    #[test]
    fn short_rows_are_padded_with_empty_cells() {
        let table = parse_table("a;b;c\nonly\n", &LoadOptions::semicolon_no_header());
        assert_eq!(table.rows()[1], vec!["only", "", ""]);
    }

    #[test]
    fn all_malformed_data_rows_yield_an_empty_table() {
        let table = parse_table(
            "a,b\n1,2,3\n4,5,6,7\n",
            &LoadOptions::comma_with_header(),
        );
        assert!(table.is_empty());
    }

    #[test]
    fn byte_order_mark_is_stripped_before_parsing() {
        let path = temp_file(
            "sweepscope_bom_test.csv",
            b"\xef\xbb\xbfTime,Sweep (T1)\n0,100\n",
        );
        let table = load_table(&path, &LoadOptions::comma_with_header()).unwrap();
        assert_eq!(table.headers().unwrap()[0], "Time");
        assert_eq!(table.column_index("Sweep (T1)"), Some(1));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("sweepscope_does_not_exist.csv");
        let err = load_table(&path, &LoadOptions::comma_with_header()).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let path = temp_file("sweepscope_bad_utf8_test.csv", b"a,b\n\xff\xfe,1\n");
        let err = load_table(&path, &LoadOptions::comma_with_header()).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}
