//! Integration tests for the `interview` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the grid, book and
//! check subcommands through the actual binary against the JSON fixtures in
//! `tests/fixtures/`.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// `interview <subcommand> --candidates .. --engineers ..`
fn interview(subcommand: &str) -> Command {
    let mut cmd = Command::cargo_bin("interview").unwrap();
    cmd.env_remove("RUST_LOG").args([
        subcommand,
        "--candidates",
        &fixture("candidates.json"),
        "--engineers",
        &fixture("engineers.json"),
    ]);
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout must be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// grid
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn grid_renders_text_table() {
    interview("grid")
        .args(["--candidate", "c1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon Tue Wed Thu Fri"))
        .stdout(predicate::str::contains("09:00    e   .   .   .   ."))
        .stdout(predicate::str::contains("10:00    O   e   .   .   ."))
        .stdout(predicate::str::contains("# locked"));
}

#[test]
fn grid_without_candidate_has_no_overlap() {
    let json = stdout_json(interview("grid").arg("--json"));
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 18);
    for row in rows {
        for state in row["states"].as_array().unwrap() {
            assert_ne!(state, "overlap");
        }
    }
    assert_eq!(rows[2]["time"], "10:00");
    assert_eq!(rows[2]["states"][0], "engineer_only");
}

#[test]
fn grid_shows_clicked_cells_as_locked() {
    interview("grid")
        .args(["--candidate", "c1", "--duration", "60", "--click", "Monday@10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10:00    #"))
        .stdout(predicate::str::contains("10:30    #"))
        .stdout(predicate::str::contains(
            "Interview scheduled: candidate Ada Lovelace, engineer Grace Hopper, Monday 10:00, 60 min",
        ));
}

#[test]
fn empty_engineer_filter_makes_everything_unavailable() {
    let json = stdout_json(
        interview("grid").args(["--candidate", "c1", "--engineer", "", "--json"]),
    );
    for row in json["rows"].as_array().unwrap() {
        for state in row["states"].as_array().unwrap() {
            assert_eq!(state, "unavailable");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// book
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn book_two_slots_in_one_session() {
    let json = stdout_json(interview("book").args([
        "--candidate",
        "c1",
        "--click",
        "Monday@10:00",
        "--click",
        "Monday@11:00",
    ]));

    // The latest click is the active booking; Grace leaves at 11:00.
    assert_eq!(json["booking"]["time"], "11:00");
    assert_eq!(json["booking"]["engineer_name"], "Edsger Dijkstra");
    assert_eq!(json["scheduled"]["candidateId"], "c1");
    assert_eq!(json["scheduled"]["engineerId"], "e2");
    assert_eq!(json["scheduled"]["slot"]["end"], "11:30");

    let locked = json["locked"].as_array().unwrap();
    assert_eq!(locked.len(), 2);
    assert_eq!(locked[0]["time"], "10:00");
    assert_eq!(locked[1]["time"], "11:00");
}

#[test]
fn book_ignores_unbookable_clicks() {
    let mut cmd = interview("book");
    cmd.args(["-v", "--candidate", "c1", "--click", "Friday@10:00"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("click ignored"));

    let json = stdout_json(&mut cmd);
    assert!(json["booking"].is_null());
    assert!(json["locked"].as_array().unwrap().is_empty());
}

#[test]
fn book_rejects_malformed_click() {
    interview("book")
        .args(["--click", "Monday10:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected DAY@HH:MM"));
}

#[test]
fn book_rejects_weekend_click() {
    interview("book")
        .args(["--click", "Saturday@10:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown weekday: Saturday"));
}

#[test]
fn book_rejects_click_off_the_grid() {
    for click in ["Monday@10:15", "Monday@08:00", "Monday@18:00"] {
        interview("book")
            .args(["--candidate", "c1", "--duration", "15", "--click", click])
            .assert()
            .failure()
            .stderr(predicate::str::contains("is not a grid slot"));
    }
}

#[test]
fn book_rejects_lowercase_weekday() {
    interview("book")
        .args(["--click", "monday@10:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown weekday: monday"));
}

// ─────────────────────────────────────────────────────────────────────────────
// selection errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn rejects_unsupported_duration() {
    interview("grid")
        .args(["--duration", "45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration 45"));
}

#[test]
fn rejects_unknown_candidate() {
    interview("grid")
        .args(["--candidate", "zz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown candidate: zz"));
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn config_supplies_fixtures_and_selection() {
    let mut cmd = Command::cargo_bin("interview").unwrap();
    cmd.env_remove("RUST_LOG").args([
        "grid",
        "--config",
        &fixture("interview.toml"),
        "--candidate",
        "c2",
        "--json",
    ]);
    let json = stdout_json(&mut cmd);

    assert_eq!(json["selection"]["duration"], 60);
    assert_eq!(json["selection"]["filter"]["only"], "e2");

    // Wednesday 13:00-14:00 fits c2 and Edsger.
    assert_eq!(json["rows"][8]["time"], "13:00");
    assert_eq!(json["rows"][8]["states"][2], "overlap");
    // Only Edsger is considered, and he starts Monday at 10:30.
    assert_eq!(json["rows"][2]["states"][0], "unavailable");
}

#[test]
fn flags_override_config() {
    let mut cmd = Command::cargo_bin("interview").unwrap();
    cmd.env_remove("RUST_LOG").args([
        "grid",
        "--config",
        &fixture("interview.toml"),
        "--engineer",
        "all",
        "--duration",
        "30",
        "--json",
    ]);
    let json = stdout_json(&mut cmd);
    assert_eq!(json["selection"]["duration"], 30);
    assert_eq!(json["selection"]["filter"], "all");
    assert_eq!(json["rows"][0]["states"][0], "engineer_only");
}

#[test]
fn missing_fixture_is_reported() {
    Command::cargo_bin("interview")
        .unwrap()
        .args(["grid", "--engineers", &fixture("engineers.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No candidates fixture"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_counts_fixture_entries() {
    interview("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Candidates: 2"))
        .stdout(predicate::str::contains("Engineers:  2"))
        .stdout(predicate::str::contains("Windows:    4"));
}

#[test]
fn check_rejects_inverted_windows() {
    Command::cargo_bin("interview")
        .unwrap()
        .args([
            "check",
            "--candidates",
            &fixture("candidates.json"),
            "--engineers",
            &fixture("invalid_engineers.json"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be before end"));
}
