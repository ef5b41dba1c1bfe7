#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rd() -> Command {
    cargo_bin_cmd!("roomdesk")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roomdesk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and seed the default room inventory (101-110)
pub fn init_db_with_rooms(db_path: &str) {
    rd().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Book room `id` with a fixed occupied interval, useful for many tests
pub fn book_room(db_path: &str, id: &str, occupant: &str) {
    rd().args([
        "--db",
        db_path,
        "book",
        id,
        "--occupant",
        occupant,
        "--from",
        "2025-07-01T10:00",
        "--to",
        "2025-07-03T12:00",
        "--state",
        "occupied",
        "--rate",
        "15000,50",
        "--agent",
        "front-desk",
    ])
    .assert()
    .success();
}
