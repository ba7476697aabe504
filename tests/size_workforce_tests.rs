use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn size_workforce_prints_scenarios_and_writes_plan() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output_arg = temp.child("plan.yaml").path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::Command::cargo_bin("fieldcast").unwrap();
    cmd.args([
        "size-workforce",
        "-c",
        "Kazan",
        "-s",
        "pharmacies",
        "-t",
        "walking",
        "--total-visits",
        "500",
        "--visits-per-day",
        "3",
        "--calendar-days",
        "30",
        "--seed",
        "42",
        "-o",
        &output_arg,
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Workforce Sizing Report"))
        .stdout(predicate::str::contains(
            "Project: 500 visits in 30 calendar days",
        ))
        .stdout(predicate::str::contains("Minimum reps:"))
        .stdout(predicate::str::contains("optimal staffing"))
        .stdout(predicate::str::contains(format!(
            "Workforce plan written to {output_arg}"
        )));

    let contents = fs::read_to_string(&output_arg).unwrap();
    assert!(contents.contains("calculations:"));
    assert!(contents.contains("min_reps_needed:"));
    assert!(contents.contains("scenarios:"));
    assert!(contents.contains("is_minimal: true"));
    assert!(contents.contains("is_optimal: true"));
    assert!(contents.contains("standard_day_example:"));
}

#[test]
fn plans_reproduce_with_the_same_seed() {
    let temp = assert_fs::TempDir::new().unwrap();
    let first_arg = temp.child("first.yaml").path().to_str().unwrap().to_string();
    let second_arg = temp
        .child("second.yaml")
        .path()
        .to_str()
        .unwrap()
        .to_string();

    for output_arg in [&first_arg, &second_arg] {
        let mut cmd = assert_cmd::Command::cargo_bin("fieldcast").unwrap();
        cmd.args([
            "size-workforce",
            "-c",
            "Moscow",
            "-s",
            "cardiologists",
            "--total-visits",
            "900",
            "--visits-per-day",
            "8",
            "--calendar-days",
            "45",
            "--seed",
            "11",
            "-o",
            output_arg,
        ]);
        cmd.assert().success();
    }

    let first = fs::read_to_string(&first_arg).unwrap();
    let second = fs::read_to_string(&second_arg).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_work_week_reports_failure() {
    let mut cmd = assert_cmd::Command::cargo_bin("fieldcast").unwrap();
    cmd.args([
        "size-workforce",
        "-c",
        "Kazan",
        "-s",
        "pharmacies",
        "--total-visits",
        "100",
        "--visits-per-day",
        "3",
        "--calendar-days",
        "30",
        "--work-days-per-week",
        "8",
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("Failed to size workforce"));
}
