//! Readers for the two read-only reference tables: the master assignment
//! list (`Coach Name`, `Assigned Field`) and the field list (`Field Name`).

use crate::errors::{AppError, AppResult};
use std::path::Path;

pub const COACH_NAME_COL: &str = "Coach Name";
pub const ASSIGNED_FIELD_COL: &str = "Assigned Field";
pub const FIELD_NAME_COL: &str = "Field Name";

/// Read the requested columns of a CSV file, one `Vec` per row in file order.
/// Rows where every requested cell is blank are skipped.
fn read_columns(path: &Path, wanted: &[&str]) -> AppResult<Vec<Vec<String>>> {
    if !path.exists() {
        return Err(AppError::MissingReferenceFile(path.display().to_string()));
    }

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = rdr.headers()?.clone();

    let positions = wanted
        .iter()
        .map(|col| {
            headers
                .iter()
                .position(|h| h.trim() == *col)
                .ok_or_else(|| AppError::InvalidReference {
                    file: path.display().to_string(),
                    column: col.to_string(),
                })
        })
        .collect::<AppResult<Vec<usize>>>()?;

    let mut rows = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let cells: Vec<String> = positions
            .iter()
            .map(|&i| row.get(i).unwrap_or("").trim().to_string())
            .collect();
        if cells.iter().any(|c| !c.is_empty()) {
            rows.push(cells);
        }
    }

    Ok(rows)
}

/// `(coach, field)` pairs of the master list, one per row.
pub fn load_master_rows(path: &Path) -> AppResult<Vec<(String, String)>> {
    let rows = read_columns(path, &[COACH_NAME_COL, ASSIGNED_FIELD_COL])?;
    Ok(rows
        .into_iter()
        .filter_map(|mut r| {
            let field = r.pop()?;
            let coach = r.pop()?;
            (!coach.is_empty() && !field.is_empty()).then_some((coach, field))
        })
        .collect())
}

/// Selectable field names in file order (duplicates kept).
pub fn load_field_names(path: &Path) -> AppResult<Vec<String>> {
    let rows = read_columns(path, &[FIELD_NAME_COL])?;
    Ok(rows.into_iter().filter_map(|mut r| r.pop()).collect())
}
