use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;

mod common;
use common::wt;

#[test]
fn test_calc_regular_day() {
    wt()
        .args(["calc", "09:00", "--at", "2025-09-01 09:00"])
        .assert()
        .success()
        .stdout(contains("17:30"))
        .stdout(contains("Regular (8.50h)"))
        .stdout(contains("Remaining: 08h 30m"))
        .stdout(contains("Europe/Vienna"))
        .stdout(contains("30 min"));
}

#[test]
fn test_calc_friday_overtime() {
    wt()
        .args(["calc", "08:00", "--at", "2025-09-05 16:00"])
        .assert()
        .success()
        .stdout(contains("Friday (7.00h)"))
        .stdout(contains("15:00"))
        .stdout(contains("Overtime: 01h 00m"))
        .stdout(contains("100%"));
}

#[test]
fn test_calc_custom_break() {
    wt()
        .args([
            "calc",
            "09:00",
            "--break-hours",
            "1",
            "--at",
            "2025-09-01 19:00",
        ])
        .assert()
        .success()
        .stdout(contains("18:00"))
        .stdout(contains("60 min"))
        .stdout(contains("Overtime: 01h 00m (incl. 30 min extra break)"));
}

#[test]
fn test_calc_json_output() {
    let out = wt()
        .args(["calc", "09:00", "--at", "2025-09-01 12:00", "--json"])
        .output()
        .expect("run worktime");

    assert!(out.status.success());
    let body: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(body["end_time"], "17:30");
    assert_eq!(body["elapsed_seconds"], 3 * 3600);
    assert_eq!(body["required_seconds"], 30600);
    assert_eq!(body["status"], "Remaining: 05h 30m");
}

#[test]
fn test_calc_reads_environment() {
    wt()
        .env("WORK_HOURS_REGULAR", "7")
        .env("WORK_MINUTES_REGULAR", "30")
        .env("STANDARD_BREAK_MINUTES", "60")
        .args(["calc", "09:00", "--at", "2025-09-02 09:00"])
        .assert()
        .success()
        .stdout(contains("Regular (8.50h)"))
        .stdout(contains("17:30"))
        .stdout(contains("60 min"));
}

#[test]
fn test_calc_timezone_override() {
    wt()
        .args(["--tz", "UTC", "calc", "09:00", "--at", "2025-09-01 10:00"])
        .assert()
        .success()
        .stdout(contains("(UTC)"));

    wt()
        .args(["--tz", "Nowhere/Land", "calc", "09:00", "--at", "2025-09-01 10:00"])
        .assert()
        .success()
        .stdout(contains("(UTC)"));
}

#[test]
fn test_calc_weekend_fails() {
    wt()
        .args(["calc", "10:00", "--at", "2025-09-06 12:00"])
        .assert()
        .failure()
        .stderr(contains("It's the weekend!"));
}

#[test]
fn test_calc_future_start_fails() {
    wt()
        .args(["calc", "10:00", "--at", "2025-09-01 09:00"])
        .assert()
        .failure()
        .stderr(contains("Start time appears to be in the future."));
}

#[test]
fn test_calc_invalid_inputs_fail() {
    wt()
        .args(["calc", "25:00", "--at", "2025-09-01 09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid start time format"));

    wt()
        .args(["calc", "08:00", "--break-minutes=-1", "--at", "2025-09-01 09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid break time entered."));

    wt()
        .args(["calc", "08:00", "--at", "01/09/2025 09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time"));
}

#[test]
fn test_request_from_stdin() {
    wt()
        .args(["request", "--at", "2025-09-01 18:00"])
        .write_stdin(r#"{"start_time": "09:00", "long_break": false}"#)
        .assert()
        .success()
        .stdout(contains("\"status\": \"Overtime: 00h 30m\""))
        .stdout(contains("\"elapsed_seconds\": 32400"));
}

#[test]
fn test_request_from_file() {
    let mut path = env::temp_dir();
    path.push("worktime_request_from_file.json");
    fs::write(
        &path,
        r#"{"start_time": "08:00", "long_break": true, "break_hours": "0", "break_minutes": "45"}"#,
    )
    .unwrap();

    wt()
        .args([
            "request",
            "--file",
            path.to_str().unwrap(),
            "--at",
            "2025-09-05 10:00",
        ])
        .assert()
        .success()
        .stdout(contains("\"end_time\": \"15:15\""))
        .stdout(contains("\"break_seconds\": 2700"));

    fs::remove_file(&path).ok();
}

#[test]
fn test_request_rejected() {
    wt()
        .args(["request", "--at", "2025-09-07 12:00"])
        .write_stdin(r#"{"start_time": "09:00"}"#)
        .assert()
        .failure()
        .stdout(contains("It's the weekend!"))
        .stderr(contains("status 400"));

    wt()
        .args(["request", "--at", "2025-09-01 12:00"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stdout(contains("Invalid request format."));
}

#[test]
fn test_config_print() {
    wt()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("standard_break_minutes: 30"))
        .stdout(contains("work_hours_friday: 6"))
        .stdout(contains("timezone: Europe/Vienna"));

    wt()
        .args(["--tz", "Asia/Tokyo", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("timezone: Asia/Tokyo").and(contains("Europe/Vienna").not()));
}
