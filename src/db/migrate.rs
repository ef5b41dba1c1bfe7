use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Created first so later migrations
/// can record their marker rows.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `rooms` table exists.
fn rooms_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='rooms'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `rooms` table has a given column.
fn rooms_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('rooms')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `rooms` table with the modern schema (including the
/// booking metadata columns and the `cleaned` flag).
fn create_rooms_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            number            TEXT NOT NULL UNIQUE,
            state             TEXT NOT NULL DEFAULT 'free' CHECK(state IN ('free','reserved','occupied')),
            occupant          TEXT,
            start_time        TEXT,
            end_time          TEXT,
            rate              REAL,
            identity_document TEXT,
            address           TEXT,
            agent             TEXT,
            notes             TEXT,
            cleaned           INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_rooms_number ON rooms(number);
        CREATE INDEX IF NOT EXISTS idx_rooms_state ON rooms(state);
        "#,
    )?;
    Ok(())
}

/// Create the append-only `history` table.
fn create_history_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS history (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            room_number       TEXT NOT NULL,
            occupant          TEXT,
            start_time        TEXT,
            end_time          TEXT,
            rate              REAL,
            identity_document TEXT,
            address           TEXT,
            agent             TEXT,
            notes             TEXT,
            recorded_at       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_history_recorded_at ON history(recorded_at);
        CREATE INDEX IF NOT EXISTS idx_history_room_number ON history(room_number);
        "#,
    )?;
    Ok(())
}

/// Early deployments created `rooms` without the metadata columns; they
/// were bolted on as bookings grew richer. Each add is guarded by a
/// PRAGMA check and recorded in the log with a version marker.
fn migrate_add_room_columns(conn: &Connection) -> Result<()> {
    let version = "20250611_0003_add_booking_metadata";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    let mut added = Vec::new();
    for (col, ddl) in [
        ("rate", "ALTER TABLE rooms ADD COLUMN rate REAL;"),
        (
            "identity_document",
            "ALTER TABLE rooms ADD COLUMN identity_document TEXT;",
        ),
        ("address", "ALTER TABLE rooms ADD COLUMN address TEXT;"),
        ("agent", "ALTER TABLE rooms ADD COLUMN agent TEXT;"),
        (
            "cleaned",
            "ALTER TABLE rooms ADD COLUMN cleaned INTEGER NOT NULL DEFAULT 0;",
        ),
    ] {
        if !rooms_has_column(conn, col)? {
            conn.execute_batch(ddl)?;
            added.push(col);
        }
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Ensured booking metadata columns on rooms')",
        [version],
    )?;

    if !added.is_empty() {
        success(format!(
            "Migration applied: {} → added columns {} to rooms table",
            version,
            added.join(", ")
        ));
    }

    Ok(())
}

/// Seed the fixed room inventory. Idempotent: existing numbers are left
/// untouched, so re-running init never resets a live board.
pub fn seed_rooms(conn: &Connection, first_room: u32, room_count: u32) -> Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT OR IGNORE INTO rooms (number, state) VALUES (?1, 'free')",
    )?;

    for n in first_room..first_room + room_count {
        stmt.execute([n.to_string()])?;
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and by `roomdesk db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure rooms table exists
    if !rooms_table_exists(conn)? {
        create_rooms_table(conn)?;
        success("Created rooms table (modern schema).");
    } else {
        migrate_add_room_columns(conn)?;
    }

    // 3) Ensure history table exists
    create_history_table(conn)?;

    // 4) Indexes are safe to re-assert on every run
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_rooms_number ON rooms(number);
        CREATE INDEX IF NOT EXISTS idx_history_recorded_at ON history(recorded_at);
        "#,
    )?;

    Ok(())
}
