use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database with all pending migrations
///  - the fixed room inventory (idempotent seed)
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing roomdesk…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;

    init_db(&conn, cfg)?;

    println!(
        "✅ Database initialized at {} ({} rooms from {})",
        &db_path, cfg.room_count, cfg.first_room
    );

    // internal audit line (non-blocking)
    if let Err(e) = log::audit(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 roomdesk initialization completed!");
    Ok(())
}
