use predicates::str::contains;
use std::fs;

mod common;
use common::{book_room, init_db_with_rooms, rd, setup_test_db, temp_out};

fn seed_history(db_path: &str) {
    init_db_with_rooms(db_path);
    book_room(db_path, "1", "Diallo");
    rd().args(["--db", db_path, "release", "1"])
        .assert()
        .success();
}

#[test]
fn export_history_to_csv() {
    let db_path = setup_test_db("export_csv");
    seed_history(&db_path);
    let out = temp_out("export_csv", "csv");

    rd().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.lines().next().unwrap().contains("room_number"));
    assert!(content.contains("Diallo"));
    assert!(content.contains("101"));
}

#[test]
fn export_history_to_json() {
    let db_path = setup_test_db("export_json");
    seed_history(&db_path);
    let out = temp_out("export_json", "json");

    rd().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed[0]["occupant"], "Diallo");
    assert_eq!(parsed[0]["room_number"], "101");
}

#[test]
fn export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    seed_history(&db_path);

    rd().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        "history.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn export_with_empty_history_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db_with_rooms(&db_path);
    let out = temp_out("export_empty", "csv");

    rd().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No archived bookings"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn export_overwrites_existing_file_with_force() {
    let db_path = setup_test_db("export_force");
    seed_history(&db_path);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("write placeholder");

    rd().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("Diallo"));
}
