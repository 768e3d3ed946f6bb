//! Clock-in / clock-out reconciliation over the in-memory ledger.

use crate::config::ClockOutStatus;
use crate::core::assignments::MasterAssignments;
use crate::errors::{AppError, AppResult};
use crate::models::{Action, ShiftRecord};
use crate::store::ledger_file::{load_ledger, save_ledger};
use crate::utils::time::hours_between;
use chrono::NaiveDateTime;
use std::path::Path;

/// Ordered shift records, owned by the running session.
///
/// Append-only, except for closing an open record in place.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ledger {
    records: Vec<ShiftRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ShiftRecord>) -> Self {
        Self { records }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        Ok(Self::from_records(load_ledger(path)?))
    }

    /// Rewrite the whole backing file with the current snapshot.
    /// The in-memory records are kept even when the write fails.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        save_ledger(path, &self.records)
    }

    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ShiftRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: ShiftRecord) {
        self.records.push(record);
    }

    /// Latest open shift of `name` by ledger position, not by timestamp.
    pub fn last_open_index(&self, name: &str) -> Option<usize> {
        self.records.iter().rposition(|r| r.is_open_for(name))
    }
}

/// High-level business logic for clock-in and clock-out.
pub struct ClockLogic;

impl ClockLogic {
    /// Build the open record for a clock-in; the caller appends it.
    pub fn record_clock_in(
        assignments: &MasterAssignments,
        name: &str,
        field: &str,
        now: NaiveDateTime,
    ) -> ShiftRecord {
        let status = assignments.status_for(name, field);
        ShiftRecord::open(name, field, status, now)
    }

    /// Close the latest open shift of `name` and return its index.
    ///
    /// Fails with `NoOpenShift` without touching the ledger when the coach
    /// has no open shift.
    pub fn record_clock_out(
        ledger: &mut Ledger,
        assignments: &MasterAssignments,
        policy: ClockOutStatus,
        name: &str,
        field: &str,
        now: NaiveDateTime,
    ) -> AppResult<usize> {
        let idx = ledger
            .last_open_index(name)
            .ok_or_else(|| AppError::NoOpenShift(name.to_string()))?;

        let rec = &mut ledger.records[idx];

        let status_field = match policy {
            ClockOutStatus::ClockOutField => field,
            ClockOutStatus::ClockInField => rec.field_name.as_str(),
        };
        let status = assignments.status_for(name, status_field);

        rec.hours_spent = rec.clock_in_time.map(|start| hours_between(start, now));
        rec.action = Some(Action::ClockedInOut);
        rec.clock_out_time = Some(now);
        rec.status = Some(status);

        Ok(idx)
    }
}
