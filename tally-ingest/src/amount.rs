//! Locale-tolerant amount normalization.
//!
//! Keeps only ASCII digits, `,`, `.` and `-`, then treats the first `,` as
//! the decimal separator: any `.` before it is thousands grouping and is
//! dropped, and the comma becomes `.`. Built for comma-decimal statements
//! ("R$ 1.234,56"). Comma-grouped amounts with a period decimal
//! ("1,234.56") come out as "1.234.56" and fail.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{IngestError, Result};

fn strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9,.\-]").expect("invalid amount strip regex"))
}

/// Normalize a formatted amount ("R$ 1.234,56", "-$12.50") into a number.
///
/// Returns `MalformedAmount` when what is left is not a number; callers
/// mapping statement rows substitute `0.0` instead of aborting.
pub fn normalize_amount(raw: &str) -> Result<f64> {
    let stripped = strip_re().replace_all(raw, "");
    let normalized = match stripped.split_once(',') {
        Some((int_part, rest)) => format!("{}.{}", int_part.replace('.', ""), rest),
        None => stripped.into_owned(),
    };

    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| IngestError::MalformedAmount { raw: raw.to_string() })
}
