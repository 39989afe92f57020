mod common;

use std::fs;

use predicates::str::contains;
use serde_json::Value;

use common::{cli, home_with_config, write_patch};

const JSON_STORE: &str = r#"{
    "store": "json",
    "brand": { "brand_name": "Acme Apparel", "image_url": "https://cdn.example/acme.png" },
    "output": { "color_enabled": false }
}"#;

const BRAND_DEAL: &str = r#"{
    "title": "Summer Promo",
    "industry": "Technology",
    "platform": "instagram",
    "address": "123 Main St",
    "deadlineToApply": "2031-07-01",
    "brief": "Do a reel",
    "guestsAllowed": "unlimited",
    "hashtags": "sale #deal"
}"#;

fn error_lines(stderr: &str) -> usize {
    stderr.lines().filter(|line| line.contains("[x]")).count()
}

#[test]
fn version_prints_build_metadata() {
    let home = home_with_config("{}");
    cli(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")))
        .stdout(contains("rustc"));
}

#[test]
fn config_path_points_into_home() {
    let home = home_with_config("{}");
    cli(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(contains("config.json"));
}

#[test]
fn config_show_fills_defaults() {
    let home = home_with_config(r#"{ "store": "json" }"#);
    let output = cli(home.path())
        .args(["config", "show"])
        .output()
        .expect("run config show");
    assert!(output.status.success());

    let config: Value = serde_json::from_slice(&output.stdout).expect("config is JSON");
    assert_eq!(config["store"], "json");
    assert_eq!(config["mock"]["latency_ms"], 400);
    assert_eq!(config["validate_all_before_submit"], false);
}

#[test]
fn autofilled_brand_deal_is_written_to_json_store() {
    let home = home_with_config(JSON_STORE);
    let patch = write_patch(home.path(), "deal.json", BRAND_DEAL);

    cli(home.path())
        .args(["brand-deal", "--autofill"])
        .arg(&patch)
        .arg("--yes")
        .assert()
        .success()
        .stdout(contains("Brand deal created successfully!"));

    let raw = fs::read_to_string(home.path().join("data").join("listings.json"))
        .expect("listings written");
    let listings: Value = serde_json::from_str(&raw).expect("listings are JSON");
    let record = &listings[0]["listing"]["record"];
    assert_eq!(listings.as_array().map(Vec::len), Some(1));
    assert_eq!(record["title"], "Summer Promo");
    assert_eq!(record["brand_name"], "Acme Apparel");
    assert_eq!(record["guests_allowed"], -1);
    assert_eq!(record["hashtags"][1], "#deal");
    assert_eq!(record["apply_deadline"], "2031-07-01T00:00:00Z");
}

#[test]
fn failing_store_exits_with_error() {
    let home = home_with_config(
        r#"{ "mock": { "latency_ms": 0, "fail_submissions": true }, "output": { "color_enabled": false } }"#,
    );
    let patch = write_patch(
        home.path(),
        "discount.json",
        r#"{ "title": "Spring sale", "category": "Fashion", "discount": "20%" }"#,
    );

    let output = cli(home.path())
        .args(["discount", "--autofill"])
        .arg(&patch)
        .arg("--yes")
        .output()
        .expect("run discount");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to create discount deal. Please try again."));
    assert_eq!(error_lines(&stderr), 1);
}

#[test]
fn validate_all_policy_rejects_incomplete_autofill() {
    let home = home_with_config(
        r#"{ "validate_all_before_submit": true, "mock": { "latency_ms": 0 } }"#,
    );
    let patch = write_patch(home.path(), "partial.json", r#"{ "title": "Half filled" }"#);

    let output = cli(home.path())
        .args(["brand-deal", "--autofill"])
        .arg(&patch)
        .arg("--yes")
        .output()
        .expect("run brand-deal");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please select an industry"));
    assert_eq!(error_lines(&stderr), 1);
}
