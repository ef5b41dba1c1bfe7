//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One `DbPool` is opened per command from the configured path and passed
//! explicitly into every core operation; there is no ambient connection.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
