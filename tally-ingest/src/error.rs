use thiserror::Error;

/// Columns every statement header must carry (matched trimmed, case-insensitive)
pub const REQUIRED_COLUMNS: [&str; 3] = ["date", "title", "amount"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IngestError {
    #[error("The file appears to be empty.")]
    EmptyInput,

    #[error("Missing columns ({}). Expected headers: date,title,amount.", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("amount {raw:?} is not a number")]
    MalformedAmount { raw: String },

    #[error("row {row} has {fields} field(s), expected at least 2")]
    MalformedRow { row: usize, fields: usize },
}

impl IngestError {
    /// Fatal errors abort the whole upload; the rest are recovered per row.
    pub fn is_fatal(&self) -> bool {
        matches!(self, IngestError::EmptyInput | IngestError::MissingColumns { .. })
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatality() {
        assert!(IngestError::EmptyInput.is_fatal());
        assert!(IngestError::MissingColumns { missing: vec!["amount".into()] }.is_fatal());
        assert!(!IngestError::MalformedAmount { raw: "abc".into() }.is_fatal());
        assert!(!IngestError::MalformedRow { row: 3, fields: 1 }.is_fatal());
    }

    #[test]
    fn test_messages() {
        assert_eq!(IngestError::EmptyInput.to_string(), "The file appears to be empty.");
        let err = IngestError::MissingColumns { missing: vec!["title".into(), "amount".into()] };
        assert_eq!(
            err.to_string(),
            "Missing columns (title, amount). Expected headers: date,title,amount."
        );
    }
}
