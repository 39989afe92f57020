use std::env;
use std::process::Command;

fn main() {
    for path in ["build.rs", ".git/HEAD", ".git/refs"] {
        println!("cargo:rerun-if-changed={path}");
    }

    let hash = command_output("git", &["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty());
    let status = command_output("git", &["status", "--porcelain"])
        .map(|changes| if changes.is_empty() { "clean" } else { "dirty" }.to_string());
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    let values = [
        ("HASH", hash),
        ("STATUS", status),
        ("TIMESTAMP", Some(timestamp)),
        ("TARGET", env::var("TARGET").ok()),
        ("PROFILE", env::var("PROFILE").ok()),
        ("RUSTC", command_output("rustc", &["--version"])),
    ];
    for (key, value) in values {
        let value = value.unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env=CREATOR_DEALS_BUILD_{key}={value}");
    }
}

/// Trimmed stdout of a successful command, or `None` when it cannot run.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|stdout| stdout.trim().to_string())
}
