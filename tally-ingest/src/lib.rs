//! tally-ingest: statement text -> rows -> typed transaction records.
//!
//! Pure and synchronous. The caller reads the uploaded file and hands over text.

pub mod amount;
pub mod csv_text;
pub mod error;
pub mod mapper;
pub mod types;

pub use amount::normalize_amount;
pub use csv_text::{tokenize, RawRow};
pub use error::{IngestError, Result, REQUIRED_COLUMNS};
pub use mapper::{map_records, map_statement, ColumnIndex};
pub use types::StatementImport;

use tracing::debug;

/// Tokenize `text`, treat the first row as the header and map the rest.
///
/// `source` labels the upload (usually the file name) and prefixes record ids.
pub fn parse_statement(text: &str, source: &str) -> Result<StatementImport> {
    let rows = tokenize(text);
    let Some((header, data)) = rows.split_first() else {
        return Err(IngestError::EmptyInput);
    };

    let import = map_statement(header, data, source)?;
    debug!(
        "{}: {} records from {} rows ({} skipped, {} amounts zeroed)",
        source,
        import.records.len(),
        import.rows_read,
        import.rows_skipped,
        import.amounts_zeroed
    );

    Ok(import)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_empty_input() {
        assert_eq!(parse_statement("", "s.csv"), Err(IngestError::EmptyInput));
    }

    #[test]
    fn test_header_only() {
        let import = parse_statement("date,title,amount\n", "s.csv").unwrap();
        assert!(import.is_empty());
        assert_eq!(import.rows_read, 0);
    }

    #[test]
    fn test_quoted_title_survives() {
        let text = "date,title,amount\n01/03,\"a, \"\"b\"\" c\",\"R$ 1.234,56\"\n";
        let import = parse_statement(text, "s.csv").unwrap();
        assert_eq!(import.records[0].title, "a, \"b\" c");
        assert_eq!(import.records[0].amount, 1234.56);
    }

    #[test]
    fn test_bom_prefixed_file_maps() {
        let import = parse_statement("\u{feff}date,title,amount\n01/03,Shop,10\n", "bom.csv").unwrap();
        assert_eq!(import.records.len(), 1);
        assert_eq!(import.records[0].date, "01/03");
        assert_eq!(import.records[0].amount, 10.0);
    }

    #[test]
    fn test_missing_columns_yields_no_records() {
        let text = "date,title\n01/03,Shop\n";
        let err = parse_statement(text, "s.csv").unwrap_err();
        assert!(matches!(err, IngestError::MissingColumns { .. }));
    }
}
