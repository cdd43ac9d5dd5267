//! tally-core: shared data model for statement analysis and monthly planning

pub mod currency;
pub mod finance;
pub mod planning;

pub use currency::Currency;
pub use finance::{TransactionRecord, UNKNOWN_TITLE};
pub use planning::{PlanningBook, PlanningEntry, PlanningError, PlanningKind, SUGGESTED_AREAS};
