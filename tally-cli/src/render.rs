//! Plain-text rendering. Number formatting lives here and nowhere else.

use tally_core::{Currency, PlanningEntry};
use tally_finance::{PlanningSummary, StatementSummary};

pub fn money(value: f64, currency: Currency) -> String {
    format!("{} {:.2}", currency.code(), value)
}

pub fn statement(summary: &StatementSummary, currency: Currency) -> String {
    let t = &summary.totals;
    let mut out = format!(
        "{} ({} transactions)\n\n  Charges  {}\n  Credits  {}\n  Net      {}\n",
        summary.source,
        summary.record_count,
        money(t.charges, currency),
        money(t.credits, currency),
        money(t.net, currency),
    );

    out.push_str("\nTop merchants\n");
    if summary.top_merchants.is_empty() {
        out.push_str("  (no charges)\n");
    }
    for (i, m) in summary.top_merchants.iter().enumerate() {
        out.push_str(&format!("  {}. {}  {}\n", i + 1, m.title, money(m.total, currency)));
    }
    out
}

pub fn entries(title: &str, list: &[PlanningEntry], currency: Currency) -> String {
    let mut out = format!("{title}\n");
    if list.is_empty() {
        out.push_str("  (none)\n");
    }
    for e in list {
        let notes = if e.notes.is_empty() { "No notes added" } else { e.notes.as_str() };
        out.push_str(&format!(
            "  {}  {}  {}  [{}]\n",
            e.label,
            money(e.amount, currency),
            notes,
            e.id
        ));
    }
    out
}

pub fn planning(summary: &PlanningSummary, currency: Currency) -> String {
    let mut out = format!(
        "Income    {}\nExpenses  {}\nNet       {}\nExpenses use {:.1}% of income\n",
        money(summary.total_income, currency),
        money(summary.total_expenses, currency),
        money(summary.net, currency),
        summary.expense_share,
    );

    out.push_str("\nBy area\n");
    if summary.by_area.is_empty() {
        out.push_str("  Add costs to see category totals.\n");
    }
    for a in &summary.by_area {
        out.push_str(&format!(
            "  {}  {}  ({:.1}%)\n",
            a.label,
            money(a.amount, currency),
            a.percent
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_ingest::parse_statement;

    #[test]
    fn test_money() {
        assert_eq!(money(1234.5, Currency::BRL), "BRL 1234.50");
        assert_eq!(money(-3.0, Currency::USD), "USD -3.00");
    }

    #[test]
    fn test_statement_lists_merchants() {
        let import = parse_statement("date,title,amount\n1,Feira,10\n2,Cafe,4\n", "m.csv").unwrap();
        let text = statement(&StatementSummary::build(&import, 6), Currency::EUR);
        assert!(text.contains("m.csv (2 transactions)"));
        assert!(text.contains("1. Feira  EUR 10.00"));
        assert!(text.contains("2. Cafe  EUR 4.00"));
    }

    #[test]
    fn test_empty_planning() {
        let text = planning(&PlanningSummary::from_book(&Default::default()), Currency::BRL);
        assert!(text.contains("Add costs to see category totals."));
    }
}
