//! Planning views over predicted expenses and incomes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tally_core::{PlanningBook, PlanningEntry};

/// Sum of entry amounts
pub fn total(entries: &[PlanningEntry]) -> f64 {
    entries.iter().map(|e| e.amount).sum()
}

/// Summed amount per label. Order is not meaningful.
pub fn category_totals(entries: &[PlanningEntry]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for e in entries {
        *totals.entry(e.label.clone()).or_insert(0.0) += e.amount;
    }
    totals
}

/// Income minus predicted expenses
pub fn net_balance(incomes: &[PlanningEntry], predictions: &[PlanningEntry]) -> f64 {
    total(incomes) - total(predictions)
}

/// `part` as a percentage of `whole`, 0 when `whole` is 0, capped at 100 for display.
fn capped_percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    (part / whole * 100.0).min(100.0)
}

/// Share of income taken by expenses, in [0, 100]
pub fn expense_share(total_expenses: f64, total_income: f64) -> f64 {
    capped_percent(total_expenses, total_income)
}

/// One area's slice of the predicted expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaShare {
    pub label: String,
    pub amount: f64,
    /// Percent of all predicted expenses, capped at 100
    pub percent: f64,
}

/// Per-area totals with their share of all predictions, in first-seen label order.
pub fn area_shares(predictions: &[PlanningEntry]) -> Vec<AreaShare> {
    let mut shares: Vec<AreaShare> = Vec::new();
    for e in predictions {
        match shares.iter_mut().find(|s| s.label == e.label) {
            Some(s) => s.amount += e.amount,
            None => shares.push(AreaShare {
                label: e.label.clone(),
                amount: e.amount,
                percent: 0.0,
            }),
        }
    }

    let all = total(predictions);
    for s in &mut shares {
        s.percent = capped_percent(s.amount, all);
    }
    shares
}

/// Everything the planning screen shows, recomputed from the current book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningSummary {
    pub total_expenses: f64,
    pub total_income: f64,
    pub net: f64,
    pub expense_share: f64,
    pub by_area: Vec<AreaShare>,
}

impl PlanningSummary {
    pub fn from_book(book: &PlanningBook) -> Self {
        let total_expenses = total(&book.predictions);
        let total_income = total(&book.incomes);

        Self {
            total_expenses,
            total_income,
            net: net_balance(&book.incomes, &book.predictions),
            expense_share: expense_share(total_expenses, total_income),
            by_area: area_shares(&book.predictions),
        }
    }
}
