use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/sample_network.json")
        .canonicalize()
        .expect("fixture network present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("freightpath-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("FREIGHTPATH_NETWORK")
        .arg("--network")
        .arg(fixture_path());
    cmd
}

#[test]
fn interstate_route_in_text() {
    cli()
        .args(["route", "--from", "2000", "--to", "3000", "--weight", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route 2000 -> 3000"))
        .stdout(predicate::str::contains("algorithm: a-star"))
        .stdout(predicate::str::contains("150.00"))
        .stdout(predicate::str::contains("[FP_5]"))
        .stdout(predicate::str::contains("NSW_EXP -> VIC_EXP"));
}

#[test]
fn route_json_is_machine_readable() {
    let output = cli()
        .args([
            "--format",
            "json",
            "route",
            "--from",
            "2050",
            "--to",
            "3010",
            "--weight",
            "100",
        ])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let best = &report["paths"][0];
    assert_eq!(best["total_cost"], 307.0);
    assert_eq!(best["num_hops"], 3);
    assert_eq!(best["providers"], serde_json::json!(["FP_1", "FP_5", "FP_2"]));
    assert_eq!(report["policy"], "cost");
}

#[test]
fn bidirectional_respects_top_k() {
    let output = cli()
        .args([
            "--format",
            "json",
            "route",
            "--from",
            "2000",
            "--to",
            "3000",
            "--weight",
            "100",
            "--algorithm",
            "bidirectional",
            "--top-k",
            "3",
        ])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let paths = report["paths"].as_array().expect("paths array");
    assert!(!paths.is_empty());
    assert!(paths.len() <= 3);
    assert_eq!(paths[0]["total_cost"], 150.0);
}

#[test]
fn multi_criteria_prints_scores() {
    cli()
        .args([
            "route", "--from", "2000", "--to", "3000", "--weight", "100", "--policy", "multi",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("policy: multi"))
        .stdout(predicate::str::contains("score 0.8312"));
}

#[test]
fn same_postcode_route_costs_nothing() {
    cli()
        .args(["route", "--from", "2000", "--to", "2000", "--weight", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost      0.00"))
        .stdout(predicate::str::contains("-0.0").not());
}

#[test]
fn unreachable_destination_is_not_an_error() {
    cli()
        .args(["route", "--from", "6000", "--to", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no viable route"));
}

#[test]
fn unknown_postcode_error_is_friendly() {
    cli()
        .args(["route", "--from", "2000", "--to", "3011"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown destination postcode: 3011"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn unknown_policy_is_rejected_by_argument_parsing() {
    cli()
        .args(["route", "--from", "2000", "--to", "3000", "--policy", "greedy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown optimization policy"));
}

#[test]
fn ignored_threshold_is_warned_about() {
    let mut cmd = cli();
    cmd.env("RUST_LOG", "warn")
        .args(["route", "--from", "2000", "--to", "3000", "--max-cost", "10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("--max-cost has no effect"));
}
