use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let paths = cfg.paths();
        let ledger = Ledger::load(&paths.ledger)?;
        ExportLogic::export(&paths, &ledger, *format, file, *force)?;
    }

    Ok(())
}
