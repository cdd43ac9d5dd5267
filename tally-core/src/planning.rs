//! Planning entries: predicted monthly expenses and expected incomes.
//!
//! Entries are created by the caller (form submission, CLI) and stored in a
//! [`PlanningBook`]. Aggregation never mutates the book.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Which list an entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlanningKind {
    #[serde(rename = "prediction")]
    Prediction,
    #[serde(rename = "income")]
    Income,
}

impl PlanningKind {
    /// Name of the label field for this kind ("area" or "source")
    pub fn label_name(&self) -> &'static str {
        match self {
            PlanningKind::Prediction => "area",
            PlanningKind::Income => "source",
        }
    }
}

/// Areas offered as suggestions when adding a prediction. Free text is accepted too.
pub const SUGGESTED_AREAS: [&str; 10] = [
    "Housing",
    "Utilities",
    "Food",
    "Transportation",
    "Healthcare",
    "Education",
    "Entertainment",
    "Debt",
    "Savings",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    #[error("{0} must not be empty")]
    EmptyLabel(&'static str),

    #[error("amount must be a number greater than zero, got {0}")]
    InvalidAmount(String),
}

/// A predicted expense or an income line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanningEntry {
    pub id: String,
    pub kind: PlanningKind,
    /// Area (prediction) or source (income)
    pub label: String,
    /// Always > 0
    pub amount: f64,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl PlanningEntry {
    /// Validate and build a new entry stamped with a fresh id and the current time.
    pub fn new(
        kind: PlanningKind,
        label: &str,
        amount: f64,
        notes: &str,
    ) -> Result<Self, PlanningError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(PlanningError::EmptyLabel(kind.label_name()));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(PlanningError::InvalidAmount(amount.to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            kind,
            label: label.to_string(),
            amount,
            notes: notes.trim().to_string(),
            created_at: Utc::now(),
        })
    }

    /// Parse the amount as typed into a form, then validate.
    pub fn from_input(
        kind: PlanningKind,
        label: &str,
        amount: &str,
        notes: &str,
    ) -> Result<Self, PlanningError> {
        let parsed: f64 = amount
            .trim()
            .parse()
            .map_err(|_| PlanningError::InvalidAmount(amount.trim().to_string()))?;
        Self::new(kind, label, parsed, notes)
    }
}

/// The caller-owned planning state: both lists, newest entry first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanningBook {
    #[serde(default)]
    pub predictions: Vec<PlanningEntry>,
    #[serde(default)]
    pub incomes: Vec<PlanningEntry>,
}

impl PlanningBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, kind: PlanningKind) -> &[PlanningEntry] {
        match kind {
            PlanningKind::Prediction => &self.predictions,
            PlanningKind::Income => &self.incomes,
        }
    }

    fn entries_mut(&mut self, kind: PlanningKind) -> &mut Vec<PlanningEntry> {
        match kind {
            PlanningKind::Prediction => &mut self.predictions,
            PlanningKind::Income => &mut self.incomes,
        }
    }

    /// Add an entry at the front of its list.
    pub fn add(&mut self, entry: PlanningEntry) {
        self.entries_mut(entry.kind).insert(0, entry);
    }

    /// Remove an entry by id from whichever list holds it.
    pub fn remove(&mut self, id: &str) -> bool {
        for kind in [PlanningKind::Prediction, PlanningKind::Income] {
            let list = self.entries_mut(kind);
            if let Some(pos) = list.iter().position(|e| e.id == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Drop every entry of one kind, returning how many were removed.
    pub fn clear(&mut self, kind: PlanningKind) -> usize {
        let list = self.entries_mut(kind);
        let n = list.len();
        list.clear();
        n
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty() && self.incomes.is_empty()
    }
}
