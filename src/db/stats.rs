use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROOM INVENTORY
    //
    let rooms: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM rooms", [], |row| row.get(0))?;
    let busy: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM rooms WHERE state != 'free'",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Rooms:{} {}{}{} ({} reserved/occupied)",
        CYAN, RESET, GREEN, rooms, RESET, busy
    );

    //
    // 3) HISTORY
    //
    let archived: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
    println!("{}• Archived bookings:{} {}", CYAN, RESET, archived);

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT recorded_at FROM history ORDER BY recorded_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Last release:{} {}", CYAN, RESET, fmt_last);

    println!();
    Ok(())
}
