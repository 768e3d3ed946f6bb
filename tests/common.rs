#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const FIELDS_CSV: &str = "Field Name\nNorth\nSouth\nEast\n";
pub const MASTER_CSV: &str =
    "Coach Name,Assigned Field\nAlice,North\nAlice,East\nCarol,South\n";

/// Isolated HOME + data directory for one test.
pub struct Workspace {
    pub root: PathBuf,
    pub home: PathBuf,
    pub data: PathBuf,
}

impl Workspace {
    pub fn ledger(&self) -> PathBuf {
        self.data.join("data.csv")
    }

    pub fn ledger_content(&self) -> String {
        fs::read_to_string(self.ledger()).expect("read ledger")
    }

    /// Ledger rows without the header line.
    pub fn ledger_rows(&self) -> Vec<String> {
        self.ledger_content()
            .lines()
            .skip(1)
            .map(str::to_string)
            .collect()
    }

    pub fn out_file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// coachtrack command bound to this workspace.
    pub fn ct(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("coachtrack");
        cmd.env("HOME", &self.home)
            .env("APPDATA", &self.home)
            .env("NO_COLOR", "1")
            .arg("--data-dir")
            .arg(&self.data);
        cmd
    }

    pub fn clock_in(&self, name: &str, field: &str, at: &str) {
        self.ct()
            .args(["in", name, "--field", field, "--at", at])
            .assert()
            .success();
    }

    pub fn clock_out(&self, name: &str, field: &str, at: &str) {
        self.ct()
            .args(["out", name, "--field", field, "--at", at])
            .assert()
            .success();
    }
}

/// Create a unique workspace inside the system temp dir, removing leftovers.
pub fn setup_workspace(name: &str) -> Workspace {
    let root = env::temp_dir().join(format!("coachtrack_it_{}", name));
    fs::remove_dir_all(&root).ok();

    let home = root.join("home");
    let data = root.join("data");
    fs::create_dir_all(&home).expect("create home");
    fs::create_dir_all(&data).expect("create data dir");

    Workspace { root, home, data }
}

/// Workspace with the standard field list and master list in place.
pub fn setup_with_references(name: &str) -> Workspace {
    let ws = setup_workspace(name);
    write_file(&ws.data.join("fields.csv"), FIELDS_CSV);
    write_file(&ws.data.join("master_list.csv"), MASTER_CSV);
    ws
}

pub fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("write fixture");
}
