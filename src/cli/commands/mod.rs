pub mod assigned;
pub mod backup;
pub mod clock;
pub mod config;
pub mod export;
pub mod fields;
pub mod init;
pub mod list;
pub mod log;

use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Open the session and surface reference-file problems as warnings.
pub(crate) fn open_session(cfg: &Config) -> AppResult<Session> {
    let session = Session::from_config(cfg)?;
    for w in &session.warnings {
        warning(w);
    }
    Ok(session)
}
