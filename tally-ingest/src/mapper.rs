//! Maps a tokenized header + data rows into typed transaction records.

use tally_core::{TransactionRecord, UNKNOWN_TITLE};
use tracing::trace;

use crate::amount::normalize_amount;
use crate::csv_text::RawRow;
use crate::error::{IngestError, Result, REQUIRED_COLUMNS};
use crate::types::StatementImport;

/// Rows with fewer fields than this are treated as blank lines
pub const MIN_ROW_FIELDS: usize = 2;

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub date: usize,
    pub title: usize,
    pub amount: usize,
}

impl ColumnIndex {
    /// Locate `date`, `title` and `amount` (trimmed, case-insensitive, first match wins).
    ///
    /// A byte-order mark counts as whitespace, so BOM-prefixed exports still match.
    pub fn from_header(header: &[String]) -> Result<Self> {
        let normalized: Vec<String> = header
            .iter()
            .map(|h| h.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}').to_lowercase())
            .collect();
        let find = |name: &str| normalized.iter().position(|h| h == name);

        match (find("date"), find("title"), find("amount")) {
            (Some(date), Some(title), Some(amount)) => Ok(Self { date, title, amount }),
            _ => Err(IngestError::MissingColumns {
                missing: REQUIRED_COLUMNS
                    .into_iter()
                    .filter(|c| find(*c).is_none())
                    .map(|c| c.to_string())
                    .collect(),
            }),
        }
    }
}

/// Map data rows into records. Fails only when the header lacks a required column.
///
/// Rows with fewer than two fields are skipped. Record ids are
/// `<source>-<n>` where `n` counts the rows that were kept.
pub fn map_records(header: &[String], rows: &[RawRow], source: &str) -> Result<Vec<TransactionRecord>> {
    map_statement(header, rows, source).map(|import| import.records)
}

/// Same as [`map_records`], keeping the per-row bookkeeping.
pub fn map_statement(header: &[String], rows: &[RawRow], source: &str) -> Result<StatementImport> {
    let columns = ColumnIndex::from_header(header)?;

    let mut out = StatementImport {
        source: source.to_string(),
        rows_read: rows.len(),
        ..Default::default()
    };

    for (row_no, row) in rows.iter().enumerate() {
        if row.len() < MIN_ROW_FIELDS {
            let issue = IngestError::MalformedRow { row: row_no, fields: row.len() };
            trace!("skipping: {issue}");
            out.rows_skipped += 1;
            continue;
        }

        let (record, zeroed) = map_row(row, &columns, source, out.records.len());
        if zeroed {
            out.amounts_zeroed += 1;
        }
        out.records.push(record);
    }

    Ok(out)
}

fn map_row(row: &RawRow, columns: &ColumnIndex, source: &str, index: usize) -> (TransactionRecord, bool) {
    let field = |i: usize| row.get(i).map(|s| s.as_str()).unwrap_or("");

    let date = field(columns.date).trim();
    let title = match field(columns.title).trim() {
        "" => UNKNOWN_TITLE,
        t => t,
    };

    // a missing or empty amount cell reads as "0"
    let raw_amount = match field(columns.amount) {
        "" => "0",
        s => s,
    };
    let (amount, zeroed) = match normalize_amount(raw_amount) {
        Ok(v) => (v, false),
        Err(e) => {
            trace!("row {index}: {e}, using 0");
            (0.0, true)
        }
    };

    let record = TransactionRecord::new(format!("{source}-{index}"), date, title, amount);
    (record, zeroed)
}
