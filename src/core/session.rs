//! One process worth of state: ledger plus reference tables, and the
//! "lookup → mutate → persist" cycle for a single submission.

use crate::config::{ClockOutStatus, Config, DataPaths};
use crate::core::assignments::MasterAssignments;
use crate::core::ledger::{ClockLogic, Ledger};
use crate::errors::{AppError, AppResult};
use crate::models::ShiftRecord;
use crate::store::log::ttlog;
use crate::store::reference::{load_field_names, load_master_rows};
use chrono::NaiveDateTime;

pub struct Session {
    pub paths: DataPaths,
    pub policy: ClockOutStatus,
    pub ledger: Ledger,
    pub assignments: MasterAssignments,
    pub field_names: Vec<String>,
    /// Non-fatal problems met while loading the reference tables.
    pub warnings: Vec<AppError>,
}

impl Session {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::open(cfg.paths(), cfg.clock_out_status)
    }

    /// Load the ledger and both reference tables.
    ///
    /// A missing reference file is recorded in `warnings` and the table is
    /// treated as empty. An unreadable ledger is an error.
    pub fn open(paths: DataPaths, policy: ClockOutStatus) -> AppResult<Self> {
        let ledger = Ledger::load(&paths.ledger)?;
        let mut warnings = Vec::new();

        let assignments = match load_master_rows(&paths.master_list) {
            Ok(rows) => MasterAssignments::from_rows(rows),
            Err(e @ AppError::MissingReferenceFile(_)) => {
                warnings.push(e);
                MasterAssignments::default()
            }
            Err(e) => return Err(e),
        };

        let field_names = match load_field_names(&paths.fields) {
            Ok(names) => names,
            Err(e @ AppError::MissingReferenceFile(_)) => {
                warnings.push(e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            paths,
            policy,
            ledger,
            assignments,
            field_names,
            warnings,
        })
    }

    /// `true` when `field` is selectable, or when there is no list to check.
    pub fn is_known_field(&self, field: &str) -> bool {
        self.field_names.is_empty() || self.field_names.iter().any(|f| f == field)
    }

    pub fn clock_in(&mut self, name: &str, field: &str, now: NaiveDateTime) -> AppResult<ShiftRecord> {
        let record = ClockLogic::record_clock_in(&self.assignments, name, field, now);
        self.ledger.push(record.clone());
        self.save()?;

        self.audit(
            "clock_in",
            name,
            &format!(
                "Clock In at {} ({})",
                field,
                record.status.map(|s| s.as_str()).unwrap_or("-")
            ),
        );
        Ok(record)
    }

    pub fn clock_out(&mut self, name: &str, field: &str, now: NaiveDateTime) -> AppResult<ShiftRecord> {
        let idx = ClockLogic::record_clock_out(
            &mut self.ledger,
            &self.assignments,
            self.policy,
            name,
            field,
            now,
        )?;
        self.save()?;

        let record = self
            .ledger
            .get(idx)
            .cloned()
            .ok_or_else(|| AppError::Other(format!("ledger row {idx} vanished")))?;

        self.audit(
            "clock_out",
            name,
            &format!(
                "Clock Out at {} after {} h",
                field,
                record
                    .hours_spent
                    .map(|h| h.to_string())
                    .unwrap_or_else(|| "?".to_string())
            ),
        );
        Ok(record)
    }

    pub fn save(&self) -> AppResult<()> {
        self.ledger.save(&self.paths.ledger)
    }

    /// Activity log writes never fail the submission.
    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.paths.log, operation, target, message) {
            crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
        }
    }
}
