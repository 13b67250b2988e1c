//! Shared helpers for bower-migrate integration tests.
//!
//! Each test builds a throwaway project directory holding `bower.json` and
//! `package.json`, then runs the real binary inside it.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a project with the given manifests. `None` leaves the file out.
#[allow(unused)]
pub fn create_project(bower: Option<&str>, package: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();

    if let Some(bower) = bower {
        fs::write(temp.path().join("bower.json"), bower).unwrap();
    }
    if let Some(package) = package {
        fs::write(temp.path().join("package.json"), package).unwrap();
    }

    temp
}

#[allow(unused)]
pub fn write_config(root: &Path, yaml: &str) {
    fs::write(root.join("config.yaml"), yaml).unwrap();
}

/// Reads `package.json` back as JSON.
#[allow(unused)]
pub fn read_package(root: &Path) -> serde_json::Value {
    let content = fs::read_to_string(root.join("package.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Runs bower-migrate in `root` with colors disabled.
pub fn run_migrate(root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("bower-migrate");
    cmd.args(extra_args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(root);

    cmd.assert()
}
