use std::fs;
use std::path::PathBuf;

use tally_core::{PlanningBook, PlanningEntry, PlanningKind};
use tally_finance::{
    category_totals, statement_totals, top_merchants, PlanningSummary, StatementSummary,
    DEFAULT_TOP_MERCHANTS,
};
use tally_ingest::{map_records, parse_statement, tokenize, IngestError};

fn statement_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("fixtures")
        .join("statement.csv")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Real-shaped export: CRLF, quoted BRL amounts, a blank line, an empty title and a bad amount.
#[test]
fn test_fixture_statement_end_to_end() {
    let text = fs::read_to_string(statement_path()).unwrap();
    let import = parse_statement(&text, "statement.csv").unwrap();

    assert_eq!(import.rows_read, 9);
    assert_eq!(import.rows_skipped, 1);
    assert_eq!(import.amounts_zeroed, 1);
    assert_eq!(import.records.len(), 8);

    let ids: Vec<&str> = import.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.first(), Some(&"statement.csv-0"));
    assert_eq!(ids.last(), Some(&"statement.csv-7"));

    assert_eq!(import.records[2].title, "Livraria \"Cultura\", Centro");
    assert_eq!(import.records[3].amount, 1034.10);
    assert_eq!(import.records[4].amount, -23.90);
    assert_eq!(import.records[5].title, "Unknown");
    assert_eq!(import.records[6].amount, 0.0);

    let totals = statement_totals(&import.records);
    assert!(approx(totals.charges, 1395.6), "charges = {}", totals.charges);
    assert!(approx(totals.credits, 23.9));
    assert!(approx(totals.net, 1371.7));

    let top = top_merchants(&import.records, DEFAULT_TOP_MERCHANTS);
    let titles: Vec<&str> = top.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Supermercado Dia", "Livraria \"Cultura\", Centro", "Uber", "Unknown"]
    );
    assert!(approx(top[0].total, 1246.5));
}

#[test]
fn test_record_count_matches_data_rows() {
    let mut text = String::from("date,title,amount\n");
    for i in 0..25 {
        text.push_str(&format!("2026-01-{:02},Shop {},{}.50\n", i + 1, i % 4, i));
    }

    let rows = tokenize(&text);
    let (header, data) = rows.split_first().unwrap();
    let records = map_records(header, data, "jan.csv").unwrap();
    assert_eq!(records.len(), 25);
    assert_eq!(records[24].id, "jan.csv-24");
}

#[test]
fn test_missing_column_processes_nothing() {
    let err = parse_statement("date,title\n01/01,Shop,10\n", "x.csv").unwrap_err();
    assert_eq!(
        err,
        IngestError::MissingColumns {
            missing: vec!["amount".to_string()]
        }
    );
}

#[test]
fn test_empty_upload() {
    assert!(tokenize("").is_empty());
    assert_eq!(parse_statement("", "x.csv").unwrap_err(), IngestError::EmptyInput);
}

#[test]
fn test_summary_is_recomputed_not_cached() {
    let first = parse_statement("date,title,amount\n1,A,10\n", "a.csv").unwrap();
    let second = parse_statement("date,title,amount\n1,B,20\n", "b.csv").unwrap();

    let a1 = StatementSummary::build(&first, 6);
    let b = StatementSummary::build(&second, 6);
    let a2 = StatementSummary::build(&first, 6);

    assert_eq!(b.source, "b.csv");
    assert_eq!(b.top_merchants[0].title, "B");
    assert_ne!(a1, b);
    assert_eq!(a1, a2);
    assert_eq!(a2.source, "a.csv");
    assert_eq!(a2.totals.charges, 10.0);
}

#[test]
fn test_planning_alongside_statement() {
    let mut book = PlanningBook::new();
    for (area, amount) in [("Housing", 1800.0), ("Food", 900.0), ("Food", 300.0)] {
        book.add(PlanningEntry::new(PlanningKind::Prediction, area, amount, "").unwrap());
    }
    book.add(PlanningEntry::new(PlanningKind::Income, "Salary", 6000.0, "").unwrap());

    let totals = category_totals(&book.predictions);
    assert_eq!(totals["Food"], 1200.0);

    let summary = PlanningSummary::from_book(&book);
    assert_eq!(summary.net, 3000.0);
    assert_eq!(summary.expense_share, 50.0);
}
