pub mod assignments;
pub mod backup;
pub mod export;
pub mod ledger;
pub mod log;
pub mod report;
pub mod session;
