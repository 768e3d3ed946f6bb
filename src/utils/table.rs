//! Table rendering utilities for CLI outputs.
//!
//! Column widths are computed on the visible text, so cells may carry ANSI
//! colors without breaking the alignment.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(visible_width(cell));
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let pad = |out: &mut String, cell: &str, width: usize| {
            out.push_str(cell);
            out.push_str(&" ".repeat(width.saturating_sub(visible_width(cell)) + 1));
        };

        // Header
        for (h, w) in self.headers.iter().zip(&widths) {
            pad(&mut out, h, *w);
        }
        out.push('\n');

        // Separator
        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&"-".repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                pad(&mut out, row.get(i).map(String::as_str).unwrap_or(""), *w);
            }
            out.push('\n');
        }

        out
    }
}
