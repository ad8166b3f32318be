#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SEED: &str = r#"{
    "Alarms": [
        {"enabled": true, "id": "8364287c-3036-4cd0-b243-0a4f5dd863ae", "period": "workdays",
         "time": "06:30", "url": "http://st01.dlf.de/dlf/01/128/mp3/stream.mp3", "volume": 25},
        {"enabled": false, "id": "30df096e-f776-404c-8619-3c4c2c4da212", "period": "once",
         "time": "07:00", "url": "http://st01.dlf.de/dlf/01/128/mp3/stream.mp3", "volume": 40}
    ],
    "InternetRadio": [
        {"id": "0a2152ef-da4f-4f26-8a77-078193da536e", "name": "BBC Radio 4",
         "url": "http://bbcwssc.ic.llnwd.net/stream/bbcwssc_mp1_ws-eieuk"},
        {"id": "{09be8e85-a9d3-4db8-b2c5-02e3eb3ff66d}", "name": "Deutschlandfunk",
         "url": "https://st01.sslstream.dlf.de/dlf/01/128/mp3/stream.mp3"}
    ],
    "Podcasts": [
        {"id": "{61f6bcda-0334-49a7-bfe9-b206b9f0bef7}", "title": "Alternativlos",
         "updateInterval": 3600, "url": "https://alternativlos.org/alternativlos.rss"}
    ]
}"#;

fn rooster_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("rooster"));
    cmd.env_remove("RUST_LOG")
        .env_remove("ROOSTER_ALARM_VOLUME")
        .env_remove("ROOSTER_PODCAST_UPDATE_INTERVAL");
    cmd
}

fn seed_file(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("seed.json");
    fs::write(&path, SEED).unwrap();
    path
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_list_without_seed_is_empty() {
    let value = stdout_json(rooster_cmd().args(["list", "alarms"]));
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn test_list_seeded_radios() {
    let temp = TempDir::new().unwrap();
    let seed = seed_file(&temp);

    let value = stdout_json(rooster_cmd().arg("--seed").arg(&seed).args(["list", "radios"]));
    let stations = value.as_array().unwrap();
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0]["name"], "BBC Radio 4");
    assert_eq!(stations[1]["id"], "{09be8e85-a9d3-4db8-b2c5-02e3eb3ff66d}");
}

#[test]
fn test_list_with_offset_and_length() {
    let temp = TempDir::new().unwrap();
    let seed = seed_file(&temp);

    let value = stdout_json(
        rooster_cmd()
            .arg("--seed")
            .arg(&seed)
            .args(["list", "alarms", "--offset", "1", "--length", "1"]),
    );
    let alarms = value.as_array().unwrap();
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0]["id"], "30df096e-f776-404c-8619-3c4c2c4da212");

    let value = stdout_json(
        rooster_cmd()
            .arg("--seed")
            .arg(&seed)
            .args(["list", "radios", "--offset", "-1"]),
    );
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn test_get_by_unbraced_id() {
    let temp = TempDir::new().unwrap();
    let seed = seed_file(&temp);

    let value = stdout_json(rooster_cmd().arg("--seed").arg(&seed).args([
        "get",
        "podcasts",
        "61f6bcda-0334-49a7-bfe9-b206b9f0bef7",
    ]));
    assert_eq!(value["title"], "Alternativlos");
    assert_eq!(value["updateInterval"], 3600);
}

#[test]
fn test_get_unknown_id_prints_error_body() {
    rooster_cmd()
        .args(["get", "radios", "c0ffee00-404c-f776-8619-3c4c2c4da212"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            r#"{"code":400,"message":"no item for this UUID"}"#,
        ));
}

#[test]
fn test_create_prints_resource_with_defaults() {
    let value = stdout_json(rooster_cmd().args([
        "create",
        "alarm",
        r#"{"time": "06:30", "url": "http://foo.bar/baz.mp3"}"#,
    ]));
    assert_eq!(value["volume"], 30);
    assert_eq!(value["period"], "daily");
    assert_eq!(value["enabled"], true);
    assert!(value["id"].as_str().is_some_and(|id| id.len() == 36));
}

#[test]
fn test_create_uses_configured_default_volume() {
    let value = stdout_json(
        rooster_cmd()
            .env("ROOSTER_ALARM_VOLUME", "55")
            .args(["create", "alarms", r#"{"time": "07:15", "url": "http://a.b/c"}"#]),
    );
    assert_eq!(value["volume"], 55);
}

#[test]
fn test_create_from_stdin() {
    let value = stdout_json(
        rooster_cmd()
            .args(["create", "radios", "-"])
            .write_stdin(r#"{"name": "AName", "url": "foo://bar.baz"}"#),
    );
    assert_eq!(value["name"], "AName");
}

#[test]
fn test_create_invalid_alarm_time() {
    rooster_cmd()
        .args([
            "create",
            "alarms",
            r#"{"time": "", "period": "once", "url": "http://foo.bar/baz.mp3"}"#,
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            r#"{"code":400,"message":"Alarm Time invalid!"}"#,
        ));
}

#[test]
fn test_delete_seeded_and_unknown() {
    let temp = TempDir::new().unwrap();
    let seed = seed_file(&temp);

    rooster_cmd()
        .arg("--seed")
        .arg(&seed)
        .args(["delete", "radios", "09be8e85-a9d3-4db8-b2c5-02e3eb3ff66d"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    rooster_cmd()
        .arg("--seed")
        .arg(&seed)
        .args(["delete", "podcasts", "c0ffee00-404c-f776-8619-3c4c2c4da212"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no item for this UUID"));
}

#[test]
fn test_missing_seed_file() {
    let temp = TempDir::new().unwrap();
    rooster_cmd()
        .arg("--seed")
        .arg(temp.path().join("absent.json"))
        .args(["list", "alarms"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot open seed file"));
}

#[test]
fn test_bad_seed_entries_are_skipped() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seed.json");
    fs::write(
        &path,
        r#"{"Alarms": [
            {"time": "25:34", "period": "once", "url": "http://a.b/c.mp3"},
            {"time": "10:00", "period": "daily", "url": "http://a.b/c.mp3"}
        ]}"#,
    )
    .unwrap();

    let output = rooster_cmd()
        .arg("--seed")
        .arg(&path)
        .args(["list", "alarms"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping seed entry"))
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["time"], "10:00");
}

#[test]
fn test_unknown_kind_fails_to_parse() {
    rooster_cmd()
        .args(["list", "weather"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weather"));
}
