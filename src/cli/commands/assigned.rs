use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Assigned { name } = cmd {
        let session = open_session(cfg)?;
        let fields = session.assignments.assigned_fields(name);

        if fields.is_empty() {
            info(format!("'{}' has no assigned field.", name));
        } else {
            println!("Fields assigned to {}:", name);
            for f in fields {
                println!("  - {}", f);
            }
        }
    }
    Ok(())
}
