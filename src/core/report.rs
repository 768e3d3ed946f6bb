//! Read-only views over the ledger: the records table and the
//! count-by-field summary.

use crate::models::ShiftRecord;
use crate::utils::colors::{color_for_action, color_for_status, colorize_optional, paint};
use crate::utils::formatting::{EMPTY_CELL, hours_to_cell, opt_text, opt_timestamp};
use crate::utils::table::Table;
use crate::utils::time::DATE_FMT;
use std::collections::BTreeMap;

/// Filters accepted by `list`.
#[derive(Debug, Default, Clone)]
pub struct RecordFilter {
    pub name: Option<String>,
    pub open_only: bool,
}

impl RecordFilter {
    pub fn matches(&self, rec: &ShiftRecord) -> bool {
        if let Some(name) = &self.name
            && &rec.name != name
        {
            return false;
        }
        !self.open_only || rec.is_open()
    }
}

pub fn filter_records<'a>(records: &'a [ShiftRecord], filter: &RecordFilter) -> Vec<&'a ShiftRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Number of records per field name, sorted by field.
/// Rows without a field name are not counted.
pub fn field_summary<'a, I>(records: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a ShiftRecord>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in records {
        let field = rec.field_name.trim();
        if !field.is_empty() {
            *counts.entry(field).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(f, c)| (f.to_string(), c))
        .collect()
}

pub fn records_table(records: &[&ShiftRecord]) -> Table {
    let mut table = Table::new([
        "#",
        "Date",
        "Name",
        "Action",
        "Time",
        "Field Name",
        "Status",
        "Clock In Time",
        "Clock Out Time",
        "Hours Spent",
    ]);

    for (i, rec) in records.iter().enumerate() {
        let action = rec.action.map(|a| a.as_str()).unwrap_or(EMPTY_CELL);
        let status = rec.status.map(|s| s.as_str()).unwrap_or(EMPTY_CELL);

        table.add_row(vec![
            (i + 1).to_string(),
            colorize_optional(
                &rec.date
                    .map(|d| d.format(DATE_FMT).to_string())
                    .unwrap_or_else(|| EMPTY_CELL.to_string()),
            ),
            colorize_optional(&opt_text(&rec.name)),
            paint(action, color_for_action(rec.action)),
            colorize_optional(&opt_timestamp(rec.time.as_ref())),
            colorize_optional(&opt_text(&rec.field_name)),
            paint(status, color_for_status(rec.status)),
            colorize_optional(&opt_timestamp(rec.clock_in_time.as_ref())),
            colorize_optional(&opt_timestamp(rec.clock_out_time.as_ref())),
            colorize_optional(
                &rec.hours_spent
                    .map(hours_to_cell)
                    .unwrap_or_else(|| EMPTY_CELL.to_string()),
            ),
        ]);
    }

    table
}

pub fn summary_table(summary: &[(String, usize)]) -> Table {
    let mut table = Table::new(["Field Name", "Count"]);
    for (field, count) in summary {
        table.add_row(vec![field.clone(), count.to_string()]);
    }
    table
}

pub struct ReportLogic;

impl ReportLogic {
    /// Print the records table followed by the summary by field.
    pub fn print(records: &[&ShiftRecord], summary_only: bool) {
        if records.is_empty() {
            println!("No records.");
            return;
        }

        if !summary_only {
            println!("Recorded Activities:\n");
            print!("{}", records_table(records).render());
            println!();
        }

        let total_hours: f64 = records.iter().filter_map(|r| r.hours_spent).sum();
        println!("Summary by Field:\n");
        print!(
            "{}",
            summary_table(&field_summary(records.iter().copied())).render()
        );
        println!(
            "\nRecords: {} | Open shifts: {} | Hours logged: {}",
            records.len(),
            records.iter().filter(|r| r.is_open()).count(),
            crate::utils::hours2readable(total_hours)
        );
    }
}
