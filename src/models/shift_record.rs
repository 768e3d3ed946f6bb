use super::{action::Action, field_status::FieldStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One row of the attendance ledger.
///
/// Created on clock-in and closed in place on clock-out. `None` marks a value
/// that is not set yet or that could not be read back from the ledger file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShiftRecord {
    pub date: Option<NaiveDate>,               // ⇔ "Date"
    pub name: String,                          // ⇔ "Name"
    pub action: Option<Action>,                // ⇔ "Action"
    pub time: Option<NaiveDateTime>,           // ⇔ "Time"
    pub field_name: String,                    // ⇔ "Field Name"
    pub status: Option<FieldStatus>,           // ⇔ "Status"
    pub clock_in_time: Option<NaiveDateTime>,  // ⇔ "Clock In Time"
    pub clock_out_time: Option<NaiveDateTime>, // ⇔ "Clock Out Time"
    pub hours_spent: Option<f64>,              // ⇔ "Hours Spent"
}

impl ShiftRecord {
    /// Build a fresh open shift starting at `now`.
    pub fn open(name: &str, field: &str, status: FieldStatus, now: NaiveDateTime) -> Self {
        Self {
            date: Some(now.date()),
            name: name.to_string(),
            action: Some(Action::ClockIn),
            time: Some(now),
            field_name: field.to_string(),
            status: Some(status),
            clock_in_time: Some(now),
            clock_out_time: None,
            hours_spent: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.action.is_some_and(|a| a.is_open())
    }

    pub fn is_open_for(&self, name: &str) -> bool {
        self.name == name && self.is_open()
    }
}
