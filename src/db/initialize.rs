use crate::config::Config;
use crate::db::migrate::{run_pending_migrations, seed_rooms};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine and
/// seeds the fixed room inventory from the configuration.
pub fn init_db(conn: &Connection, cfg: &Config) -> AppResult<()> {
    // NO direct CREATE TABLE here.
    // All schema is guaranteed by migrations.
    run_pending_migrations(conn)?;

    seed_rooms(conn, cfg.first_room, cfg.room_count)?;
    Ok(())
}
