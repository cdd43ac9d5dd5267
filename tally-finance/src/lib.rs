//! tally-finance: summary views over statement records and planning entries.
//!
//! Every function here is pure: same input, same output, nothing retained between calls.

pub mod planning;
pub mod statement;
pub mod summary;

pub use planning::{
    area_shares, category_totals, expense_share, net_balance, total, AreaShare, PlanningSummary,
};
pub use statement::{
    statement_totals, top_merchants, MerchantTotal, StatementTotals, DEFAULT_TOP_MERCHANTS,
};
pub use summary::StatementSummary;
