// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use assert_cmd::Command;
use pointfeed::config::Settings;
use pointfeed::{cli, commands::points};
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

const TX: &str = "거래일자,브랜드,브랜드명,구매금액,적립포인트,사용포인트
20260103,A,올리브영,10000,100,0
20260115,A,올리브영,10000,0,0
20260120,B,CGV,2000,0,300
20260125,A,,0,40,0
";

fn write(dir: &Path, name: &str, body: &str) -> String {
    let p = dir.join(name);
    std::fs::write(&p, body).unwrap();
    p.to_string_lossy().to_string()
}

#[test]
fn history_limit_respected() {
    let dir = tempdir().unwrap();
    let tx = write(dir.path(), "tx.csv", TX);
    let domains = write(dir.path(), "domains.csv", "brand_code,domain\nA,Beauty\n");

    let matches = cli::build_cli().get_matches_from([
        "pointfeed", "points", "history", "--limit", "2", "--tx", &tx, "--domains", &domains,
    ]);
    if let Some(("points", points_m)) = matches.subcommand() {
        if let Some(("history", history_m)) = points_m.subcommand() {
            let rows = points::history_rows(&Settings::default(), history_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, "2026.01.25");
            assert_eq!(rows[0].title, "CJ ONE");
            assert_eq!(rows[1].amount, "-300P");
        } else {
            panic!("no history subcommand");
        }
    } else {
        panic!("no points subcommand");
    }
}

#[test]
fn card_uses_configured_window() {
    let dir = tempdir().unwrap();
    let tx = write(dir.path(), "tx.csv", TX);
    let domains = write(dir.path(), "domains.csv", "brand_code,domain\n");
    let mut settings = Settings::default();
    settings.spend_window.end = 20260115;

    let matches = cli::build_cli().get_matches_from([
        "pointfeed", "points", "summary", "--tx", &tx, "--domains", &domains,
    ]);
    let (_, points_m) = matches.subcommand().unwrap();
    let (_, summary_m) = points_m.subcommand().unwrap();
    let card = points::card(&settings, summary_m).unwrap();
    assert_eq!(card.total_spend, 20000);
    assert_eq!(card.total_earned_points, 140);
    assert_eq!(card.total_use_sum, 300);
    assert_eq!(card.unique_brand_count, 2);
}

#[test]
fn binary_prints_summary_json() {
    let dir = tempdir().unwrap();
    let tx = write(dir.path(), "tx.csv", TX);
    let domains = write(dir.path(), "domains.csv", "brand_code,domain\nA,Beauty\n");
    let config = dir.path().join("config.json");

    Command::cargo_bin("pointfeed")
        .unwrap()
        .args(["--config", config.to_str().unwrap()])
        .args(["points", "summary", "--json", "--tx", &tx, "--domains", &domains])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalSpend\": 22000"))
        .stdout(predicate::str::contains("\"uniqueBrandCount\": 2"));
}

#[test]
fn binary_reports_missing_source() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let absent = dir.path().join("nope.csv");

    Command::cargo_bin("pointfeed")
        .unwrap()
        .args(["--config", config.to_str().unwrap()])
        .args(["points", "domains", "--tx", absent.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.csv"));
}
