use crate::cli::commands::open_session;
use crate::config::Config;
use crate::errors::AppResult;

/// Print the selectable field names, one per line.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg)?;

    if session.field_names.is_empty() {
        println!("No fields available.");
        return Ok(());
    }

    for (i, f) in session.field_names.iter().enumerate() {
        println!("{:>3}. {}", i + 1, f);
    }
    Ok(())
}
