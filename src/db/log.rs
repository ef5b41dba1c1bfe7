use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append an audit row to the `log` table. The target is a room
/// number or a file path, depending on the operation.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
        params![Local::now().to_rfc3339(), operation, target, message],
    )?;
    Ok(())
}
