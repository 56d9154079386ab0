// SPDX-License-Identifier: MIT OR Apache-2.0

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const ORGS: &str = r#"[
  {"name": "River Keepers", "region": "West Michigan", "metroArea": "Grand Rapids Metro",
   "geoLocations": ["Walker", "Grand Rapids"], "focus": "['Water', 'Land']",
   "mission": "Protecting the Grand River watershed", "city": "Grand Rapids"},
  {"name": "Detroit Air Alliance", "region": "Southeast Michigan", "metroArea": "Detroit Metro",
   "geoLocations": ["Detroit"], "focus": ["Air", "Climate"], "city": "Detroit"},
  {"name": "Lakeshore Dunes Trust", "region": "West Michigan", "metroArea": "Holland Area",
   "geoLocations": ["Holland"], "focus": "Land", "city": "Holland"},
  {"name": "Statewide Climate Network", "focus": ["Climate"], "city": "Lansing"},
  {"name": "Yooper Trails", "region": "Upper Peninsula", "metro_area": "Marquette Area",
   "geo_location": ["Marquette"], "mission_statement_text": "Trail stewardship across the UP",
   "focus": ["Land"], "website": "https://example.org"},
  "not a record"
]"#;

fn write_file(path: &std::path::Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write file");
}

fn setup() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("orgs.json"), ORGS);
    dir
}

fn orgscope(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("orgscope"));
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    cmd
}

fn search_json(dir: &TempDir, extra: &[&str]) -> Value {
    let mut cmd = orgscope(dir);
    cmd.args(["--format", "json", "--compact", "search", "-d", "orgs.json"])
        .args(extra);
    let assert = cmd.assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    serde_json::from_str(&out).expect("json")
}

fn names(payload: &Value) -> Vec<&str> {
    payload["results"]
        .as_array()
        .expect("results")
        .iter()
        .map(|r| r["name"].as_str().expect("name"))
        .collect()
}

#[test]
fn no_filters_returns_every_record_in_order() {
    let dir = setup();
    let payload = search_json(&dir, &[]);

    assert_eq!(payload["total"], 5);
    assert_eq!(payload["matched"], 5);
    assert_eq!(
        names(&payload),
        vec![
            "River Keepers",
            "Detroit Air Alliance",
            "Lakeshore Dunes Trust",
            "Statewide Climate Network",
            "Yooper Trails",
        ]
    );
}

#[test]
fn region_filter_keeps_only_that_region() {
    let dir = setup();
    let payload = search_json(&dir, &["-r", "West Michigan"]);
    assert_eq!(
        names(&payload),
        vec!["River Keepers", "Lakeshore Dunes Trust"]
    );
}

#[test]
fn region_and_focus_intersect() {
    let dir = setup();
    let payload = search_json(&dir, &["-r", "West Michigan", "-f", "Water"]);
    assert_eq!(names(&payload), vec!["River Keepers"]);
}

#[test]
fn focus_is_any_of_within_the_dimension() {
    let dir = setup();
    let payload = search_json(&dir, &["-f", "Air", "-f", "Water"]);
    assert_eq!(
        names(&payload),
        vec!["River Keepers", "Detroit Air Alliance"]
    );
}

#[test]
fn metro_selection_also_selects_its_region() {
    let dir = setup();
    let payload = search_json(&dir, &["-m", "Holland Area"]);

    assert_eq!(names(&payload), vec!["Lakeshore Dunes Trust"]);
    let regions = payload["state"]["selectedRegions"]
        .as_array()
        .expect("selected regions");
    assert_eq!(regions, &vec![Value::from("West Michigan")]);
}

#[test]
fn local_filter_matches_any_listed_location() {
    let dir = setup();
    let payload = search_json(&dir, &["-m", "Grand Rapids Metro", "-l", "Walker"]);
    assert_eq!(names(&payload), vec!["River Keepers"]);
}

#[test]
fn local_outside_selected_metros_is_dropped() {
    let dir = setup();
    let payload = search_json(&dir, &["-m", "Grand Rapids Metro", "-l", "Detroit"]);

    assert!(payload["state"]["selectedLocals"]
        .as_array()
        .expect("selected locals")
        .is_empty());
    assert_eq!(names(&payload), vec!["River Keepers"]);
}

#[test]
fn search_text_is_case_insensitive_over_name_mission_and_city() {
    let dir = setup();

    let by_mission = search_json(&dir, &["-q", "  WATERSHED "]);
    assert_eq!(names(&by_mission), vec!["River Keepers"]);

    let by_storage_mission = search_json(&dir, &["-q", "stewardship"]);
    assert_eq!(names(&by_storage_mission), vec!["Yooper Trails"]);

    let by_city = search_json(&dir, &["-q", "lansing"]);
    assert_eq!(names(&by_city), vec!["Statewide Climate Network"]);
}

#[test]
fn storage_field_names_are_understood() {
    let dir = setup();
    let payload = search_json(&dir, &["-m", "Marquette Area", "-l", "Marquette"]);

    assert_eq!(names(&payload), vec!["Yooper Trails"]);
    assert_eq!(payload["results"][0]["website"], "https://example.org");
}

#[test]
fn limit_caps_listed_results_but_not_the_match_count() {
    let dir = setup();
    let payload = search_json(&dir, &["-r", "West Michigan", "-n", "1"]);

    assert_eq!(payload["matched"], 2);
    assert_eq!(payload["shown"], 1);
    assert_eq!(names(&payload), vec!["River Keepers"]);
}

#[test]
fn text_output_reports_empty_result() {
    let dir = setup();
    orgscope(&dir)
        .args(["search", "-d", "orgs.json", "-q", "no such organization"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No organizations found."));
}

#[test]
fn text_output_lists_matches() {
    let dir = setup();
    orgscope(&dir)
        .args(["find", "-d", "orgs.json", "-f", "Air"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Detroit Air Alliance"))
        .stdout(predicate::str::contains("Air, Climate"));
}

#[test]
fn missing_data_flag_explains_how_to_pass_one() {
    let dir = TempDir::new().expect("tempdir");
    orgscope(&dir)
        .args(["search", "-q", "river"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No organization data given"))
        .stderr(predicate::str::contains("--data"));
}

#[test]
fn nonexistent_data_file_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    orgscope(&dir)
        .args(["search", "-d", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Organization data not found"));
}

#[test]
fn non_array_snapshot_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("orgs.json"), r#"{"name": "solo"}"#);
    orgscope(&dir)
        .args(["search", "-d", "orgs.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a JSON array"));
}

#[test]
fn config_file_supplies_data_and_format() {
    let dir = setup();
    write_file(
        &dir.path().join(".orgscoperc.toml"),
        "data = \"orgs.json\"\ndefault_format = \"json\"\nmax_results = 2\n",
    );

    let assert = orgscope(&dir).args(["search"]).assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let payload: Value = serde_json::from_str(&out).expect("json");

    assert_eq!(payload["matched"], 5);
    assert_eq!(payload["shown"], 2);
}
