//! Formatting utilities used for CLI and export outputs.

use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;

pub const EMPTY_CELL: &str = "--";

/// Hours as written in the ledger: shortest decimal form, e.g. `2.5`, `0.08`.
pub fn hours_to_cell(hours: f64) -> String {
    let s = format!("{:.2}", hours);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Hours for human output: `02h 30m` (with sign when negative).
pub fn hours2readable(hours: f64) -> String {
    let mins = (hours * 60.0).round() as i64;
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

pub fn opt_timestamp(ts: Option<&NaiveDateTime>) -> String {
    ts.map(format_timestamp)
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

pub fn opt_text(s: &str) -> String {
    if s.trim().is_empty() {
        EMPTY_CELL.to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_cell_trims_trailing_zeros() {
        assert_eq!(hours_to_cell(2.5), "2.5");
        assert_eq!(hours_to_cell(2.0), "2");
        assert_eq!(hours_to_cell(0.08), "0.08");
        assert_eq!(hours_to_cell(-1.25), "-1.25");
        assert_eq!(hours_to_cell(0.0), "0");
    }

    #[test]
    fn readable_hours() {
        assert_eq!(hours2readable(2.5), "02h 30m");
        assert_eq!(hours2readable(-0.25), "-00h 15m");
    }
}
