//! Release/archive lifecycle and the housekeeping toggle.

use predicates::str::contains;

mod common;
use common::{book_room, init_db_with_rooms, rd, setup_test_db};

#[test]
fn release_archives_booking_and_frees_room() {
    let db_path = setup_test_db("release_archives");
    init_db_with_rooms(&db_path);
    book_room(&db_path, "1", "Diallo");

    rd().args(["--db", &db_path, "release", "1"])
        .assert()
        .success()
        .stdout(contains("Room 101 released."));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");

    // exactly one history row, carrying the pre-release booking
    let (count, occupant, room_number): (i64, Option<String>, String) = conn
        .query_row(
            "SELECT COUNT(*), occupant, room_number FROM history",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .expect("read history");
    assert_eq!(count, 1);
    assert_eq!(occupant.as_deref(), Some("Diallo"));
    assert_eq!(room_number, "101");

    // room reset to free with every booking field cleared
    let (state, occupant, start, end, rate, agent): (
        String,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<f64>,
        Option<String>,
    ) = conn
        .query_row(
            "SELECT state, occupant, start_time, end_time, rate, agent FROM rooms WHERE id = 1",
            [],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ))
            },
        )
        .expect("read room");

    assert_eq!(state, "free");
    assert!(occupant.is_none());
    assert!(start.is_none());
    assert!(end.is_none());
    assert!(rate.is_none());
    assert!(agent.is_none());
}

#[test]
fn release_of_free_room_archives_empty_snapshot() {
    // Candidate bug kept on purpose: releasing an already-free room
    // still writes a history row, just with NULL booking fields.
    let db_path = setup_test_db("release_free");
    init_db_with_rooms(&db_path);

    rd().args(["--db", &db_path, "release", "5"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (count, occupant): (i64, Option<String>) = conn
        .query_row("SELECT COUNT(*), occupant FROM history", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .expect("read history");

    assert_eq!(count, 1);
    assert!(occupant.is_none());
}

#[test]
fn double_release_archives_two_snapshots() {
    let db_path = setup_test_db("release_twice");
    init_db_with_rooms(&db_path);
    book_room(&db_path, "2", "Ndiaye");

    rd().args(["--db", &db_path, "release", "2"])
        .assert()
        .success();
    rd().args(["--db", &db_path, "release", "2"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM history WHERE room_number = '102'", [], |row| {
            row.get(0)
        })
        .expect("count history");

    // second release archives the empty snapshot
    assert_eq!(count, 2);
}

#[test]
fn release_of_unknown_room_fails_without_history_row() {
    let db_path = setup_test_db("release_unknown");
    init_db_with_rooms(&db_path);

    rd().args(["--db", &db_path, "release", "99"])
        .assert()
        .failure()
        .stderr(contains("Room not found: 99"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))
        .expect("count history");
    assert_eq!(count, 0);
}

#[test]
fn release_leaves_cleaned_flag_untouched() {
    let db_path = setup_test_db("release_cleaned");
    init_db_with_rooms(&db_path);
    book_room(&db_path, "4", "Sow");

    rd().args(["--db", &db_path, "clean", "4"])
        .assert()
        .success();
    rd().args(["--db", &db_path, "release", "4"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let cleaned: i64 = conn
        .query_row("SELECT cleaned FROM rooms WHERE id = 4", [], |row| row.get(0))
        .expect("read cleaned");
    assert_eq!(cleaned, 1);
}

#[test]
fn clean_toggled_twice_returns_to_original() {
    let db_path = setup_test_db("clean_twice");
    init_db_with_rooms(&db_path);

    rd().args(["--db", &db_path, "clean", "1"])
        .assert()
        .success()
        .stdout(contains("Room 101 marked cleaned."));

    rd().args(["--db", &db_path, "clean", "1"])
        .assert()
        .success()
        .stdout(contains("Room 101 marked not cleaned."));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let cleaned: i64 = conn
        .query_row("SELECT cleaned FROM rooms WHERE id = 1", [], |row| row.get(0))
        .expect("read cleaned");
    assert_eq!(cleaned, 0);
}

#[test]
fn history_lists_newest_first() {
    let db_path = setup_test_db("history_order");
    init_db_with_rooms(&db_path);

    book_room(&db_path, "1", "Diallo");
    rd().args(["--db", &db_path, "release", "1"])
        .assert()
        .success();

    book_room(&db_path, "2", "Ndiaye");
    rd().args(["--db", &db_path, "release", "2"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let first: String = conn
        .query_row(
            "SELECT room_number FROM history ORDER BY recorded_at DESC, id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .expect("read history");
    assert_eq!(first, "102");

    rd().args(["--db", &db_path, "history"])
        .assert()
        .success()
        .stdout(contains("Diallo"))
        .stdout(contains("Ndiaye"));
}
