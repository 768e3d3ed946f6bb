use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::resolve_now;

/// Handle the `in` and `out` commands: one submission of the attendance form.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (name, field, at, clocking_in) = match cmd {
        Commands::In { name, field, at } => (name, field, at, true),
        Commands::Out { name, field, at } => (name, field, at, false),
        _ => return Ok(()),
    };

    //
    // 1. Resolve the event time (now, unless --at is given)
    //
    let now = resolve_now(at.as_ref())?;

    //
    // 2. Load ledger + reference tables
    //
    let mut session = open_session(cfg)?;

    if !session.is_known_field(field) {
        warning(format!("'{}' is not in the field list.", field));
    }

    //
    // 3. Mutate + persist
    //
    if clocking_in {
        let rec = session.clock_in(name, field, now)?;
        success(format!(
            "Recorded: {} - Clock In at {} ({}).",
            name,
            field,
            rec.status.map(|s| s.as_str()).unwrap_or("-")
        ));
    } else {
        let rec = session.clock_out(name, field, now)?;
        success(format!(
            "Recorded: {} - Clock Out at {} ({} h, {}).",
            name,
            field,
            rec.hours_spent
                .map(crate::utils::formatting::hours_to_cell)
                .unwrap_or_else(|| "?".to_string()),
            rec.status.map(|s| s.as_str()).unwrap_or("-")
        ));
    }

    //
    // 4. Show the ledger
    //
    println!();
    let records: Vec<_> = session.ledger.records().iter().collect();
    ReportLogic::print(&records, false);

    Ok(())
}
