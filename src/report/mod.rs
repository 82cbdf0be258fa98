//! Terminal report formatting.
//!
//! Formatting is a presentation concern only: sorting and the FTD value
//! computation happen on raw numbers before anything in this module runs.

use crate::domain::FailRecord;

/// Format the full top-N report: headline plus table.
pub fn format_top_report(
    records: &[FailRecord],
    requested: usize,
    latest_date: Option<&str>,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Top {requested} single-stock fails by FTD value on {}:\n\n",
        latest_date.unwrap_or("-"),
    ));

    if records.is_empty() {
        out.push_str("(no qualifying records)\n");
        return out;
    }

    out.push_str(&format_table(records));
    out
}

fn format_table(rows: &[FailRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:<8} {:<32} {:<10} {:>10} {:>14} {:>16}\n",
        "date", "symbol", "company", "cusip", "price", "qty_fails", "ftd_value"
    ));
    out.push_str(&format!(
        "{:-<10} {:-<8} {:-<32} {:-<10} {:-<10} {:-<14} {:-<16}\n",
        "", "", "", "", "", "", ""
    ));

    for r in rows {
        out.push_str(&format!(
            "{:<10} {:<8} {:<32} {:<10} {:>10.2} {:>14} {:>16}\n",
            r.settlement_date,
            truncate(&r.symbol, 8),
            truncate(&r.company, 32),
            truncate(&r.cusip, 10),
            r.price,
            fmt_thousands(r.quantity_fails as i64),
            fmt_currency(r.ftd_value),
        ));
    }

    out
}

/// Format an integer with `,` grouping separators.
pub fn fmt_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 { format!("-{out}") } else { out }
}

/// Format a monetary value as `$x,xxx.xx`.
pub fn fmt_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let body = format!("{}.{:02}", fmt_thousands(cents / 100), cents % 100);
    if value < 0.0 {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
