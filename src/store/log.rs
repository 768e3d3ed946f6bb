use crate::errors::AppResult;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// One line of the internal activity log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: usize,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an internal log line to the activity log file.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, formattato in ISO 8601
    let now = Local::now().to_rfc3339();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;

    Ok(())
}

/// Read every entry of the activity log, numbered from 1.
pub fn read_log(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut entries = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        let cell = |n: usize| row.get(n).unwrap_or("").to_string();
        entries.push(LogEntry {
            id: i + 1,
            date: cell(0),
            operation: cell(1),
            target: cell(2),
            message: cell(3),
        });
    }

    Ok(entries)
}
