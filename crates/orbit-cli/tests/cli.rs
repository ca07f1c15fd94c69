use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn orbit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("orbit").unwrap();
    cmd.env_remove("ORBIT_DATA_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir);
    cmd
}

fn json(dir: &Path, args: &[&str]) -> Value {
    let output = orbit(dir)
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "orbit {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn add(dir: &Path, name: &str, kind: &str) -> String {
    let contact = json(dir, &["add", name, "--type", kind]);
    contact["id"].as_str().unwrap().to_string()
}

#[test]
fn test_add_and_list() {
    let tmp = TempDir::new().unwrap();
    let id = add(tmp.path(), "Ada Lovelace", "friend");
    assert!(tmp.path().join("orbit-contacts.json").exists());

    orbit(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains(&id[..8]));

    let listed = json(tmp.path(), &["list"]);
    assert_eq!(listed[0]["contact"]["name"], "Ada Lovelace");
    // No interactions yet
    assert_eq!(listed[0]["score"], 100);

    let family = json(tmp.path(), &["list", "--type", "family"]);
    assert_eq!(family.as_array().unwrap().len(), 0);
}

#[test]
fn test_log_and_show_by_prefix() {
    let tmp = TempDir::new().unwrap();
    let id = add(tmp.path(), "Grace", "professional");

    orbit(tmp.path())
        .args(["log", &id[..8], "Great talk about compilers", "--mood", "positive"])
        .args(["--kind", "call", "--topics", "work, compilers, work"])
        .assert()
        .success();

    let shown = json(tmp.path(), &["show", &id]);
    assert_eq!(shown["contact"]["name"], "Grace");
    assert!(shown["contact"]["lastInteraction"].is_string());
    assert_eq!(shown["interactions"][0]["type"], "call");
    assert_eq!(
        shown["interactions"][0]["topics"],
        serde_json::json!(["work", "compilers"])
    );
    // 0.3*100 + 0.3*10 + 0.4*50
    assert_eq!(shown["health"], 53);

    let stats = json(tmp.path(), &["stats"]);
    assert_eq!(stats["totalContacts"], 1);
    assert_eq!(stats["totalInteractions"], 1);
    assert_eq!(stats["byType"]["professional"], 1);
}

#[test]
fn test_edit_records_energy_history() {
    let tmp = TempDir::new().unwrap();
    let id = add(tmp.path(), "Sam", "romantic");

    orbit(tmp.path())
        .args(["edit", &id, "--energy", "nourishing", "--notes", "likes jazz"])
        .assert()
        .success();

    let energy = json(tmp.path(), &["energy", &id]);
    assert_eq!(energy["current"], "nourishing");
    assert_eq!(energy["history"].as_array().unwrap().len(), 1);
    assert_eq!(energy["trend"], "stable");

    orbit(tmp.path())
        .args(["edit", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_rm_cascades() {
    let tmp = TempDir::new().unwrap();
    let keep = add(tmp.path(), "Keep", "family");
    let gone = add(tmp.path(), "Gone", "friend");
    orbit(tmp.path()).args(["log", &keep, "dinner"]).assert().success();
    orbit(tmp.path()).args(["log", &gone, "coffee"]).assert().success();
    orbit(tmp.path()).args(["remind", &gone, "3"]).assert().success();

    orbit(tmp.path())
        .args(["rm", &gone])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted Gone"));

    let stats = json(tmp.path(), &["stats"]);
    assert_eq!(stats["totalContacts"], 1);
    assert_eq!(stats["totalInteractions"], 1);
    let reminders = json(tmp.path(), &["reminders"]);
    assert_eq!(reminders.as_array().unwrap().len(), 0);
}

#[test]
fn test_reminder_lifecycle() {
    let tmp = TempDir::new().unwrap();
    let id = add(tmp.path(), "Mom", "family");

    let scheduled = json(tmp.path(), &["remind", &id, "0"]);
    let reminder_id = scheduled[0]["id"].as_str().unwrap().to_string();
    assert_eq!(scheduled[0]["contactName"], "Mom");

    let due = json(tmp.path(), &["reminders", "--due"]);
    assert_eq!(due.as_array().unwrap().len(), 1);

    orbit(tmp.path())
        .args(["done", &reminder_id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("reach out to Mom"));

    let due = json(tmp.path(), &["reminders", "--due"]);
    assert_eq!(due.as_array().unwrap().len(), 0);
    let all = json(tmp.path(), &["reminders"]);
    assert_eq!(all[0]["status"], "completed");
}

#[test]
fn test_analytics_commands_on_fresh_contacts() {
    let tmp = TempDir::new().unwrap();
    add(tmp.path(), "A", "friend");
    add(tmp.path(), "B", "friend");

    orbit(tmp.path())
        .arg("suggest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Everyone is up to date."));

    let analysis = json(tmp.path(), &["analyze"]);
    assert_eq!(analysis["totalContacts"], 2);
    assert_eq!(analysis["health"]["healthy"], 2);
    assert_eq!(analysis["byEnergy"]["neutral"], 2);
    assert_eq!(analysis["insights"][0], "Most of your contacts are friend");

    let sentiment = json(tmp.path(), &["sentiment"]);
    assert_eq!(sentiment["contacts"][0]["sentiment"], "unknown");
    assert_eq!(sentiment["contacts"][0]["interactionCount"], 0);
    assert_eq!(sentiment["overall"]["summary"], "Your relationships are generally stable.");

    let attention = json(tmp.path(), &["attention"]);
    assert_eq!(attention.as_array().unwrap().len(), 0);
}

#[test]
fn test_validation_errors() {
    let tmp = TempDir::new().unwrap();

    orbit(tmp.path())
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name must not be empty"));

    orbit(tmp.path())
        .args(["add", "Ada", "--type", "nemesis"])
        .assert()
        .failure();

    orbit(tmp.path())
        .args(["log", "nobody", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No contact matches 'nobody'"));
}

#[test]
fn test_corrupt_snapshot_is_not_overwritten() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("orbit-contacts.json");
    std::fs::write(&path, "{not json").unwrap();

    orbit(tmp.path())
        .args(["add", "Ada"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
}

#[test]
fn test_init_and_custom_store_key() {
    let tmp = TempDir::new().unwrap();
    orbit(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Orbit initialized"));
    assert!(tmp.path().join("config.json").exists());

    orbit(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    std::fs::write(
        tmp.path().join("config.json"),
        r#"{"store_key": "people"}"#,
    )
    .unwrap();
    add(tmp.path(), "Ada", "friend");
    assert!(tmp.path().join("people.json").exists());
    assert!(!tmp.path().join("orbit-contacts.json").exists());
}

#[test]
fn test_data_dir_from_env() {
    let tmp = TempDir::new().unwrap();
    Command::cargo_bin("orbit")
        .unwrap()
        .env("ORBIT_DATA_DIR", tmp.path())
        .args(["add", "Ada"])
        .assert()
        .success();
    assert!(tmp.path().join("orbit-contacts.json").exists());
}
