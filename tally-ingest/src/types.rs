use serde::{Deserialize, Serialize};
use tally_core::TransactionRecord;

/// Result of ingesting one uploaded statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementImport {
    /// Label the record ids are derived from (usually the file name)
    pub source: String,
    /// Mapped records, in file order
    pub records: Vec<TransactionRecord>,
    /// Data rows seen after the header
    pub rows_read: usize,
    /// Rows dropped for having fewer than 2 fields
    pub rows_skipped: usize,
    /// Rows whose amount could not be read and was set to 0
    pub amounts_zeroed: usize,
}

impl StatementImport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
