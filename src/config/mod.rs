use crate::errors::AppResult;
use crate::utils::path::{expand_tilde, resolve_in};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Which field the status is recomputed against when a shift is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockOutStatus {
    /// The field named on the clock-out submission.
    #[default]
    ClockOutField,
    /// The field recorded when the shift was opened.
    ClockInField,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,
    #[serde(default = "default_fields_file")]
    pub fields_file: String,
    #[serde(default = "default_master_list_file")]
    pub master_list_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub clock_out_status: ClockOutStatus,
}

fn default_data_dir() -> String {
    Config::config_dir().to_string_lossy().to_string()
}
fn default_ledger_file() -> String {
    "data.csv".to_string()
}
fn default_fields_file() -> String {
    "fields.csv".to_string()
}
fn default_master_list_file() -> String {
    "master_list.csv".to_string()
}
fn default_log_file() -> String {
    "activity.log".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            ledger_file: default_ledger_file(),
            fields_file: default_fields_file(),
            master_list_file: default_master_list_file(),
            log_file: default_log_file(),
            clock_out_status: ClockOutStatus::default(),
        }
    }
}

/// Resolved locations of every file the tracker touches.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub ledger: PathBuf,
    pub fields: PathBuf,
    pub master_list: PathBuf,
    pub log: PathBuf,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("coachtrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".coachtrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("coachtrack.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Write the configuration file unless one is already there.
    /// Returns `true` when a new file was written.
    pub fn write_if_missing(&self) -> AppResult<bool> {
        let path = Self::config_file();
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(Self::config_dir())?;
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(true)
    }

    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn paths(&self) -> DataPaths {
        let base = self.data_dir();
        DataPaths {
            ledger: resolve_in(&base, &self.ledger_file),
            fields: resolve_in(&base, &self.fields_file),
            master_list: resolve_in(&base, &self.master_list_file),
            log: resolve_in(&base, &self.log_file),
        }
    }
}
