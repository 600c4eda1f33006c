use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const SAMPLE_CSV: &str = "\
Time,Program,Course,Interactions
2024-01-05 09:00,A,X,3
2024-01-12 09:00,A,Y,2
2024-02-01 10:00,B,X,1
";

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write test csv");
    path
}

fn run_visitdash(args: &[&str], home: &Path, envs: &[(&str, &str)]) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_visitdash").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("visitdash.exe");
        } else {
            path.push("visitdash");
        }
        path.to_string_lossy().into_owned()
    });
    let mut cmd = Command::new(bin);
    cmd.args(args)
        // Keep any real user config out of the way
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("VISITDASH_DATA")
        .env_remove("VISITDASH_BIND")
        .env_remove("RUST_LOG");
    for (k, v) in envs {
        cmd.env(k, v);
    }
    let output = cmd.output().expect("run visitdash");
    (output.status.success(), output.stdout, output.stderr)
}

fn charts_json(dir: &TempDir, csv: &Path, program: &str, month: &str) -> Value {
    let (ok, stdout, stderr) = run_visitdash(
        &[
            "charts",
            "--data",
            csv.to_str().unwrap(),
            "--program",
            program,
            "--month",
            month,
            "--json",
        ],
        dir.path(),
        &[],
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    serde_json::from_slice(&stdout).expect("json")
}

fn chart<'a>(json: &'a Value, id: &str) -> &'a Value {
    json["charts"]
        .as_array()
        .expect("charts array")
        .iter()
        .find(|c| c["id"] == id)
        .map(|c| &c["chart"])
        .unwrap_or_else(|| panic!("missing chart {id}"))
}

#[test]
fn summary_json_reports_dataset_wide_stats() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "visits.csv", SAMPLE_CSV);

    let (ok, stdout, stderr) = run_visitdash(
        &["summary", "--json", "--data", csv.to_str().unwrap()],
        dir.path(),
        &[],
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["most_visited_program"], "A");
    assert_eq!(json["most_visited_course"], "X");
    assert_eq!(json["busiest_hour"], 9);
    assert_eq!(json["total_interactions"], 3);
    assert_eq!(json["months"], serde_json::json!(["January", "February"]));
}

#[test]
fn summary_table_renders_without_color() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "visits.csv", SAMPLE_CSV);

    let (ok, stdout, _) = run_visitdash(
        &["summary", "--no-color", "--data", csv.to_str().unwrap()],
        dir.path(),
        &[],
    );
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("Program with the Most Visits"));
    assert!(text.contains("9:00"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn charts_json_for_program_a_in_january() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "visits.csv", SAMPLE_CSV);
    let json = charts_json(&dir, &csv, "A", "January");

    assert_eq!(json["row_count"], 2);
    assert_eq!(json["charts"].as_array().unwrap().len(), 7);

    let programs = chart(&json, "program-bar");
    assert_eq!(programs["bars"], serde_json::json!([{"label": "A", "count": 2}]));

    let courses = chart(&json, "course-bar");
    assert_eq!(
        courses["bars"],
        serde_json::json!([{"label": "X", "count": 1}, {"label": "Y", "count": 1}])
    );

    // Both January rows fall on a Friday
    let heatmap = chart(&json, "weekday-heatmap");
    assert_eq!(heatmap["values"], serde_json::json!([0, 0, 0, 0, 2, 0, 0]));

    let scatter = chart(&json, "interactions-scatter");
    assert_eq!(scatter["points"].as_array().unwrap().len(), 2);
    assert_eq!(scatter["points"][0]["value"], 3.0);
}

#[test]
fn charts_for_empty_selection_succeed_with_no_marks() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "visits.csv", SAMPLE_CSV);
    let json = charts_json(&dir, &csv, "B", "January");

    assert_eq!(json["row_count"], 0);
    assert_eq!(chart(&json, "program-bar")["bars"], serde_json::json!([]));
    assert_eq!(chart(&json, "program-pie")["slices"], serde_json::json!([]));
    assert_eq!(
        chart(&json, "interactions-scatter")["points"],
        serde_json::json!([])
    );
}

#[test]
fn blank_interactions_load_and_only_drop_from_scatter() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "gaps.csv",
        "\
Time,Program,Course,Interactions
2024-01-05 09:00,A,X,3
2024-01-12 09:00,A,Y,
2024-01-19 10:00,A,X,1
",
    );
    let json = charts_json(&dir, &csv, "A", "January");

    assert_eq!(json["row_count"], 3);
    assert_eq!(
        chart(&json, "program-bar")["bars"],
        serde_json::json!([{"label": "A", "count": 3}])
    );
    assert_eq!(
        chart(&json, "weekday-heatmap")["values"],
        serde_json::json!([0, 0, 0, 0, 3, 0, 0])
    );
    assert_eq!(
        chart(&json, "interactions-scatter")["points"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn charts_default_to_initial_selection() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "visits.csv", SAMPLE_CSV);

    let (ok, stdout, _) = run_visitdash(
        &["charts", "--json", "--data", csv.to_str().unwrap()],
        dir.path(),
        &[],
    );
    assert!(ok);
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["selection"]["program"], "A");
    assert_eq!(json["selection"]["month"], "January");
}

#[test]
fn hour_bars_are_sorted_by_hour() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "hours.csv",
        "\
Time,Program,Course,Interactions
2024-03-04 15:00,A,X,1
2024-03-04 08:00,A,X,1
2024-03-05 15:30,A,X,1
2024-03-06 11:00,A,X,1
",
    );
    let json = charts_json(&dir, &csv, "A", "March");

    let labels: Vec<&str> = chart(&json, "hour-bar")["bars"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["8", "11", "15"]);
}

#[test]
fn data_path_can_come_from_env() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "visits.csv", SAMPLE_CSV);

    let (ok, stdout, stderr) = run_visitdash(
        &["summary", "--json"],
        dir.path(),
        &[("VISITDASH_DATA", csv.to_str().unwrap())],
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["total_interactions"], 3);
}

#[test]
fn data_path_can_come_from_config_file() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "visits.csv", SAMPLE_CSV);
    fs::write(
        dir.path().join(".visitdash.toml"),
        format!("data = {:?}\n", csv.to_str().unwrap()),
    )
    .unwrap();

    let (ok, stdout, stderr) = run_visitdash(&["summary", "--json"], dir.path(), &[]);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["most_visited_program"], "A");
}

#[test]
fn missing_data_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");

    let (ok, _, stderr) = run_visitdash(
        &["summary", "--data", missing.to_str().unwrap()],
        dir.path(),
        &[],
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Data file not found"));
}

#[test]
fn unparseable_timestamp_fails_with_row_number() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "bad.csv",
        "\
Time,Program,Course,Interactions
2024-01-05 09:00,A,X,3
yesterday-ish,A,Y,2
",
    );

    let (ok, _, stderr) = run_visitdash(
        &["summary", "--data", csv.to_str().unwrap()],
        dir.path(),
        &[],
    );
    assert!(!ok);
    let stderr = String::from_utf8_lossy(&stderr);
    assert!(stderr.contains("cannot parse timestamp"), "stderr: {stderr}");
    assert!(stderr.contains("yesterday-ish"));
}

#[test]
fn missing_column_fails() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "cols.csv", "Time,Program,Interactions\n2024-01-05 09:00,A,3\n");

    let (ok, _, stderr) = run_visitdash(
        &["summary", "--data", csv.to_str().unwrap()],
        dir.path(),
        &[],
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Course"));
}

#[test]
fn invalid_timezone_fails() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "visits.csv", SAMPLE_CSV);

    let (ok, _, stderr) = run_visitdash(
        &[
            "summary",
            "--timezone",
            "Mars/Olympus",
            "--data",
            csv.to_str().unwrap(),
        ],
        dir.path(),
        &[],
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Invalid timezone"));
}

#[test]
fn invalid_bind_fails_before_serving() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "visits.csv", SAMPLE_CSV);

    let (ok, _, stderr) = run_visitdash(
        &["serve", "--bind", "not-an-address", "--data", csv.to_str().unwrap()],
        dir.path(),
        &[],
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Invalid bind address"));
}
