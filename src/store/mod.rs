//! Flat-file persistence: the ledger CSV, the reference tables and the
//! internal activity log.

pub mod ledger_file;
pub mod log;
pub mod reference;
