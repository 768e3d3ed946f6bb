use crate::config::DataPaths;
use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::store::ledger_file::write_ledger_csv;
use crate::store::log::ttlog;
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        paths: &DataPaths,
        ledger: &Ledger,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => {
                info(format!("Exporting to CSV: {}", path.display()));
                write_ledger_csv(path, ledger.records())?;
            }
            ExportFormat::Json => {
                info(format!("Exporting to JSON: {}", path.display()));
                let json_data = serde_json::to_string_pretty(ledger.records())?;
                let mut out = File::create(path)?;
                out.write_all(json_data.as_bytes())?;
            }
        }

        success(format!(
            "{} export completed: {} ({} records)",
            format.as_str().to_uppercase(),
            path.display(),
            ledger.len()
        ));

        if let Err(e) = ttlog(
            &paths.log,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} records as {}", ledger.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(())
    }
}

/// Existing files are overwritten only with `force` or after confirmation.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
