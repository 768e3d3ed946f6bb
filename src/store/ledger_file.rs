//! Whole-snapshot CSV persistence of the ledger.
//!
//! The file is always rewritten in full; there is no incremental writer.

use crate::errors::{AppError, AppResult};
use crate::models::{Action, FieldStatus, ShiftRecord};
use crate::utils::formatting::hours_to_cell;
use crate::utils::time::{DATE_FMT, format_timestamp, parse_date, parse_timestamp};
use csv::StringRecord;
use std::fs;
use std::path::Path;

pub const LEDGER_HEADERS: [&str; 9] = [
    "Date",
    "Name",
    "Action",
    "Time",
    "Field Name",
    "Status",
    "Clock In Time",
    "Clock Out Time",
    "Hours Spent",
];

/// Position of every expected column in the file being read, if present.
struct ColumnIndex([Option<usize>; 9]);

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut idx = [None; 9];
        for (slot, name) in idx.iter_mut().zip(LEDGER_HEADERS) {
            *slot = headers.iter().position(|h| h.trim() == name);
        }
        Self(idx)
    }

    fn cell<'r>(&self, rec: &'r StringRecord, col: usize) -> &'r str {
        self.0[col].and_then(|i| rec.get(i)).unwrap_or("")
    }

    fn read(&self, rec: &StringRecord) -> ShiftRecord {
        ShiftRecord {
            date: parse_date(self.cell(rec, 0)),
            name: self.cell(rec, 1).to_string(),
            action: Action::from_ledger_str(self.cell(rec, 2)),
            time: parse_timestamp(self.cell(rec, 3)),
            field_name: self.cell(rec, 4).to_string(),
            status: FieldStatus::from_ledger_str(self.cell(rec, 5)),
            clock_in_time: parse_timestamp(self.cell(rec, 6)),
            clock_out_time: parse_timestamp(self.cell(rec, 7)),
            hours_spent: self.cell(rec, 8).trim().parse::<f64>().ok().filter(|h| h.is_finite()),
        }
    }
}

/// Load the ledger; a missing file is an empty ledger.
///
/// Missing columns and unparsable cells become `None` instead of failing.
pub fn load_ledger(path: &Path) -> AppResult<Vec<ShiftRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns = ColumnIndex::from_headers(rdr.headers()?);

    let mut records = Vec::new();
    for row in rdr.records() {
        records.push(columns.read(&row?));
    }

    Ok(records)
}

/// One ledger row in header order; absent values become empty cells.
pub fn to_row(rec: &ShiftRecord) -> [String; 9] {
    let ts = |t: Option<&chrono::NaiveDateTime>| t.map(format_timestamp).unwrap_or_default();
    [
        rec.date
            .map(|d| d.format(DATE_FMT).to_string())
            .unwrap_or_default(),
        rec.name.clone(),
        rec.action.map(|a| a.as_str().to_string()).unwrap_or_default(),
        ts(rec.time.as_ref()),
        rec.field_name.clone(),
        rec.status.map(|s| s.as_str().to_string()).unwrap_or_default(),
        ts(rec.clock_in_time.as_ref()),
        ts(rec.clock_out_time.as_ref()),
        rec.hours_spent.map(hours_to_cell).unwrap_or_default(),
    ]
}

pub fn write_ledger_csv(path: &Path, records: &[ShiftRecord]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(LEDGER_HEADERS)?;
    for rec in records {
        wtr.write_record(to_row(rec))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Overwrite the backing file with the full ledger.
pub fn save_ledger(path: &Path, records: &[ShiftRecord]) -> AppResult<()> {
    let persist_failure = |e: AppError| AppError::PersistFailure {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| persist_failure(e.into()))?;
    }

    write_ledger_csv(path, records).map_err(persist_failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_timestamp;
    use std::env;
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("coachtrack_unit_{}.csv", name));
        let _ = fs::remove_file(&path);
        path
    }

    fn closed_record() -> ShiftRecord {
        let start = parse_timestamp("2025-04-02 09:00:00").unwrap();
        let mut rec = ShiftRecord::open("Alice", "North", FieldStatus::Correct, start);
        rec.action = Some(Action::ClockedInOut);
        rec.clock_out_time = parse_timestamp("2025-04-02 11:30:00");
        rec.hours_spent = Some(2.5);
        rec
    }

    #[test]
    fn missing_file_is_an_empty_ledger() {
        let path = temp_file("missing");
        assert!(load_ledger(&path).unwrap().is_empty());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = temp_file("roundtrip");
        let open = ShiftRecord::open(
            "Bob",
            "South",
            FieldStatus::Incorrect,
            parse_timestamp("2025-04-02 10:15:00").unwrap(),
        );
        let ledger = vec![closed_record(), open];

        save_ledger(&path, &ledger).unwrap();
        let loaded = load_ledger(&path).unwrap();

        assert_eq!(loaded, ledger);
    }

    #[test]
    fn header_row_is_exact() {
        let path = temp_file("header");
        save_ledger(&path, &[]).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.lines().next().unwrap(),
            "Date,Name,Action,Time,Field Name,Status,Clock In Time,Clock Out Time,Hours Spent"
        );
        assert!(load_ledger(&path).unwrap().is_empty());
    }

    #[test]
    fn absent_values_are_written_as_empty_cells() {
        let row = to_row(&ShiftRecord::open(
            "Bob",
            "South",
            FieldStatus::Incorrect,
            parse_timestamp("2025-04-02 10:15:00").unwrap(),
        ));
        assert_eq!(row[7], "");
        assert_eq!(row[8], "");
        assert_eq!(row[6], "2025-04-02 10:15:00");
    }

    #[test]
    fn missing_columns_and_bad_cells_become_none() {
        let path = temp_file("partial");
        fs::write(
            &path,
            "Name,Action,Field Name,Clock In Time,Hours Spent\n\
             Carol,Clock In,East,not a time,\n\
             Dave,Dancing,West,2025-04-02 08:00:00.250000,abc\n",
        )
        .unwrap();

        let loaded = load_ledger(&path).unwrap();
        assert_eq!(loaded.len(), 2);

        assert_eq!(loaded[0].name, "Carol");
        assert_eq!(loaded[0].action, Some(Action::ClockIn));
        assert_eq!(loaded[0].date, None);
        assert_eq!(loaded[0].status, None);
        assert_eq!(loaded[0].clock_in_time, None);

        assert_eq!(loaded[1].action, None);
        assert!(loaded[1].clock_in_time.is_some());
        assert_eq!(loaded[1].hours_spent, None);
    }

    #[test]
    fn unwritable_target_is_a_persist_failure() {
        let dir = env::temp_dir().join("coachtrack_unit_dir_target");
        fs::create_dir_all(&dir).unwrap();
        let err = save_ledger(&dir, &[closed_record()]).unwrap_err();
        assert!(matches!(err, AppError::PersistFailure { .. }));
    }
}
