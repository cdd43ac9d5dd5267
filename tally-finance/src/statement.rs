//! Statement views: charge/credit totals and top merchants.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tally_core::TransactionRecord;

/// Default number of merchants in a top-merchants view
pub const DEFAULT_TOP_MERCHANTS: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementTotals {
    /// Sum of amounts >= 0
    pub charges: f64,
    /// Sum of |amount| for amounts < 0
    pub credits: f64,
    /// Running signed sum of every amount
    pub net: f64,
}

/// A merchant (exact title) and its summed charges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantTotal {
    pub title: String,
    pub total: f64,
}

/// Charges, credits and net in a single pass over the records.
pub fn statement_totals(records: &[TransactionRecord]) -> StatementTotals {
    records.iter().fold(StatementTotals::default(), |mut acc, r| {
        if r.is_credit() {
            acc.credits += r.abs_amount();
        } else {
            acc.charges += r.amount;
        }
        acc.net += r.amount;
        acc
    })
}

/// Group positive amounts by exact title and return the `n` largest totals.
///
/// Ties keep the order in which the titles first appeared.
pub fn top_merchants(records: &[TransactionRecord], n: usize) -> Vec<MerchantTotal> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut merchants: Vec<MerchantTotal> = Vec::new();

    for r in records.iter().filter(|r| r.amount > 0.0) {
        let slot = *slots.entry(r.title.as_str()).or_insert_with(|| {
            merchants.push(MerchantTotal {
                title: r.title.clone(),
                total: 0.0,
            });
            merchants.len() - 1
        });
        merchants[slot].total += r.amount;
    }

    // stable: equal totals stay in first-seen order
    merchants.sort_by(|a, b| b.total.total_cmp(&a.total));
    merchants.truncate(n);
    merchants
}
