//! Serializable statement summary handed to the presentation layer

use serde::{Deserialize, Serialize};
use tally_ingest::StatementImport;
use tracing::debug;

use crate::statement::{statement_totals, top_merchants, MerchantTotal, StatementTotals};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub source: String,
    pub record_count: usize,
    pub totals: StatementTotals,
    pub top_merchants: Vec<MerchantTotal>,
}

impl StatementSummary {
    /// Recompute every statement view from an import.
    pub fn build(import: &StatementImport, top_n: usize) -> Self {
        let totals = statement_totals(&import.records);
        let top = top_merchants(&import.records, top_n);
        debug!(
            "{}: charges={:.2} credits={:.2} net={:.2}, {} merchants ranked",
            import.source,
            totals.charges,
            totals.credits,
            totals.net,
            top.len()
        );

        Self {
            source: import.source.clone(),
            record_count: import.records.len(),
            totals,
            top_merchants: top,
        }
    }
}
