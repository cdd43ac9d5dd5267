//! Transaction record type produced by statement ingestion

use serde::{Deserialize, Serialize};

/// Title used when a statement row has an empty title column
pub const UNKNOWN_TITLE: &str = "Unknown";

/// One mapped row of an uploaded statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    /// `<source>-<index>`, unique within one upload
    pub id: String,
    /// Date column as written in the file (not parsed)
    pub date: String,
    /// Merchant / description
    pub title: String,
    /// Positive = charge, negative = credit/refund
    pub amount: f64,
}

impl TransactionRecord {
    /// Create a new TransactionRecord
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        title: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            title: title.into(),
            amount,
        }
    }

    /// Returns true if this is a credit or refund (amount < 0). Anything else,
    /// zero included, is a charge.
    pub fn is_credit(&self) -> bool {
        self.amount < 0.0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}
