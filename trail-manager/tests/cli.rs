use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn data(file: &str) -> String {
    format!("{}/data/{}", env!("CARGO_MANIFEST_DIR"), file)
}

fn park_args() -> Vec<String> {
    vec![
        "--landmarks".to_string(),
        data("landmarks.csv"),
        "--trails".to_string(),
        data("trails.csv"),
    ]
}

#[test]
fn test_binary_help() {
    let mut cmd = cargo_bin_cmd!("trail-manager");
    cmd.arg("--help").assert().success();
}

#[test]
fn test_distances_report() {
    let mut cmd = cargo_bin_cmd!("trail-manager");
    cmd.args(park_args())
        .args(["distances", "L12"])
        .assert()
        .success()
        .stdout(
            "Landmarks Reachable from Campsite 1 (L12) {\n   \
             300 feet to Overlook 2 (L14)\n   \
             300 feet to Showers 1 (L13)\n}\n",
        );
}

#[test]
fn test_distances_invalid_origin() {
    let mut cmd = cargo_bin_cmd!("trail-manager");
    cmd.args(park_args())
        .args(["distances", "L404"])
        .assert()
        .success()
        .stdout("The provided landmark ID (L404) is invalid for the park.\n");
}

#[test]
fn test_stations_report_ordered_map() {
    let mut cmd = cargo_bin_cmd!("trail-manager");
    cmd.args(park_args())
        .args(["--map", "ordered", "stations", "3"])
        .assert()
        .success()
        .stdout(
            "Proposed Locations for First Aid Stations {\n   \
             Park Entrance (L01) - 3 intersecting trails\n   \
             Waterfall (L07) - 3 intersecting trails\n}\n",
        );
}

#[test]
fn test_stations_negative_threshold() {
    let mut cmd = cargo_bin_cmd!("trail-manager");
    cmd.args(park_args())
        .args(["stations", "-5"])
        .assert()
        .success()
        .stdout("Number of intersecting trails must be greater than 0.\n");
}

#[test]
fn test_stations_json() {
    let mut cmd = cargo_bin_cmd!("trail-manager");
    let output = cmd
        .args(park_args())
        .args(["--json", "stations", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["threshold"], 3);
    assert_eq!(value["candidates"][0]["id"], "L01");
    assert_eq!(value["candidates"][1]["id"], "L07");
    assert_eq!(value["candidates"][1]["intersecting_trails"], 3);
}

#[test]
fn test_menu_session() {
    let mut cmd = cargo_bin_cmd!("trail-manager");
    cmd.args(park_args())
        .arg("menu")
        .write_stdin("2 L15\n1 4\nx\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No landmarks are reachable from Pond (L15).",
        ))
        .stdout(predicate::str::contains(
            "No landmarks have at least 4 intersecting trails.",
        ))
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::ends_with("Exiting...\n"));
}

#[test]
fn test_missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("trail-manager");
    cmd.args([
        "--landmarks",
        "does-not-exist.csv",
        "--trails",
        data("trails.csv").as_str(),
        "distances",
        "L01",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("could not load park"));
}

#[test]
fn test_dangling_trail_fails() {
    let dir = tempfile::tempdir().unwrap();
    let trails = dir.path().join("trails.csv");
    std::fs::write(&trails, "landmark_one,landmark_two,length\nL01,L99,10\n").unwrap();

    let mut cmd = cargo_bin_cmd!("trail-manager");
    cmd.args(["--landmarks", data("landmarks.csv").as_str(), "--trails"])
        .arg(&trails)
        .args(["stations", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown landmark L99"));
}
