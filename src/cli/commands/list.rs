use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{RecordFilter, ReportLogic, filter_records};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        name,
        open,
        summary,
    } = cmd
    {
        let session = open_session(cfg)?;

        let filter = RecordFilter {
            name: name.clone(),
            open_only: *open,
        };
        let records = filter_records(session.ledger.records(), &filter);

        ReportLogic::print(&records, *summary);
    }
    Ok(())
}
