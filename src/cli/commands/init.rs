use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::store::log;
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (left alone if present)
///  - the data directory
///  - an empty ledger with the header row (left alone if present)
pub fn handle(cfg: &Config) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    if cfg.write_if_missing()? {
        success(format!("Config file: {}", Config::config_file().display()));
    } else {
        info(format!(
            "Config file already present: {}",
            Config::config_file().display()
        ));
    }

    //
    // 2️⃣ DATA DIRECTORY + LEDGER
    //
    let paths = cfg.paths();
    fs::create_dir_all(cfg.data_dir())?;

    if paths.ledger.exists() {
        info(format!("Ledger already present: {}", paths.ledger.display()));
    } else {
        Ledger::new().save(&paths.ledger)?;
        success(format!("Ledger: {}", paths.ledger.display()));
    }

    for reference in [&paths.fields, &paths.master_list] {
        if !reference.exists() {
            info(format!("Reference file expected at {}", reference.display()));
        }
    }

    //
    // 3️⃣ LOG INTERNO (non bloccante)
    //
    if let Err(e) = log::ttlog(
        &paths.log,
        "init",
        &paths.ledger.to_string_lossy(),
        "Ledger initialized",
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("coachtrack initialization completed!");
    Ok(())
}
