use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn simulate_day_prints_report_and_writes_result_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output_file = temp.child("day.yaml");
    let output_arg = output_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::Command::cargo_bin("fieldcast").unwrap();
    cmd.args([
        "simulate-day",
        "-c",
        "Moscow",
        "-s",
        "cardiologists",
        "-v",
        "8",
        "-t",
        "car",
        "--seed",
        "42",
        "-o",
        &output_arg,
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Day Simulation Report"))
        .stdout(predicate::str::contains("City: Moscow"))
        .stdout(predicate::str::contains("Schedule:"))
        .stdout(predicate::str::contains(format!(
            "Day result written to {output_arg}"
        )));

    let contents = fs::read_to_string(&output_arg).unwrap();
    assert!(contents.contains("total_hours:"));
    assert!(contents.contains("successful_visits:"));
    assert!(contents.contains("districts_visited:"));
    assert!(contents.contains("events:"));
}

#[test]
fn same_seed_writes_identical_result_files() {
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
            "simulate-day",
            "-c",
            "Kazan",
            "-s",
            "pharmacies",
            "-v",
            "6",
            "-t",
            "walking",
            "--seed",
            "7",
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
fn json_format_writes_json() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output_arg = temp.child("day.json").path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::Command::cargo_bin("fieldcast").unwrap();
    cmd.args([
        "simulate-day",
        "-c",
        "Novosibirsk",
        "-s",
        "pediatricians",
        "-v",
        "5",
        "--seed",
        "3",
        "-f",
        "json",
        "-o",
        &output_arg,
    ]);
    cmd.assert().success();

    let contents = fs::read_to_string(&output_arg).unwrap();
    assert!(contents.trim_start().starts_with('{'));
    assert!(contents.contains("\"total_hours\""));
    assert!(contents.contains("\"events\""));
}

#[test]
fn unknown_city_still_reports_a_day() {
    let mut cmd = assert_cmd::Command::cargo_bin("fieldcast").unwrap();
    cmd.args(["simulate-day", "-c", "Atlantis", "-s", "therapists", "-v", "5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("City: Atlantis"))
        .stdout(predicate::str::contains("Efficiency: 65.0%"));
}

#[test]
fn zero_visits_reports_failure() {
    let mut cmd = assert_cmd::Command::cargo_bin("fieldcast").unwrap();
    cmd.args(["simulate-day", "-c", "Moscow", "-s", "therapists", "-v", "0"]);

    cmd.assert()
        .stderr(predicate::str::contains("Failed to simulate day"));
}

#[test]
fn custom_cities_file_feeds_the_simulation() {
    let temp = assert_fs::TempDir::new().unwrap();
    let cities_file = temp.child("cities.yaml");
    cities_file
        .write_str(
            r#"- name: Tver
  polyclinics: 30
  pharmacies: 110
  cardiology_doctors: 120
  therapy_doctors: 700
  pediatrics_doctors: 300
  on_duty_share: 0.6
  open_pharmacy_share: 0.8
  area_km2: 152.0
  districts: 4
  avg_distance_km: 3.5
  same_clinic_probability: 0.5
  waiting_time_min: 10
  waiting_time_max: 30
  doctor_absence_probability: 0.1
"#,
        )
        .unwrap();
    let cities_arg = cities_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::Command::cargo_bin("fieldcast").unwrap();
    cmd.args([
        "simulate-day",
        "-c",
        "Tver",
        "-s",
        "therapists",
        "-v",
        "6",
        "--seed",
        "11",
        "--cities",
        &cities_arg,
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("City: Tver"))
        .stdout(predicate::str::contains("Schedule:"));
}
