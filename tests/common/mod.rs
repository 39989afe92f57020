use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated `CREATOR_DEALS_HOME` seeded with `config_json`.
pub fn home_with_config(config_json: &str) -> TempDir {
    let home = TempDir::new().expect("create temp home");
    fs::write(home.path().join("config.json"), config_json).expect("write config");
    home
}

pub fn cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("creator_deals_cli").expect("binary built");
    cmd.env("CREATOR_DEALS_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

pub fn write_patch(home: &Path, name: &str, json: &str) -> std::path::PathBuf {
    let path = home.join(name);
    fs::write(&path, json).expect("write patch");
    path
}
