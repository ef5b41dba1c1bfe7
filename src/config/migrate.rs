//! Config file migrations. These only touch the YAML file, never the
//! database, so they can run before a connection exists.

use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension};
use serde_yaml::Value;
use std::fs;

/// Check which of the expected keys are missing from the config file.
/// Used by `config --check`.
pub fn missing_keys() -> std::io::Result<Vec<&'static str>> {
    let conf_file = super::Config::config_file();

    if !conf_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&conf_file)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| std::io::Error::other(format!("parse config: {e}")))?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        for key in [
            "database",
            "first_room",
            "room_count",
            "quick_open",
            "quick_close",
            "quick_occupied_within_min",
        ] {
            if !map.contains_key(Value::String(key.to_string())) {
                missing.push(key);
            }
        }
    }

    Ok(missing)
}

/// Migration that adds the quick-booking window parameters to the YAML
/// config, if missing, and marks the migration as applied in the `log`
/// table. Config files written before the quick path existed only carry
/// `database` and the room inventory keys.
pub fn migrate_add_quick_window(conn: &Connection) -> Result<(), Error> {
    let version = "20250720_0005_add_quick_window";

    // Check if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    let conf_file = super::Config::config_file();

    if conf_file.exists() {
        let content = fs::read_to_string(&conf_file).map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to read config {:?}: {}", conf_file, e)),
            )
        })?;

        if let Ok(mut yaml) = serde_yaml::from_str::<Value>(&content)
            && let Some(map) = yaml.as_mapping_mut()
        {
            let mut changed = false;

            for (key, default) in [
                ("quick_open", Value::String("06:00".into())),
                ("quick_close", Value::String("23:59".into())),
                ("quick_occupied_within_min", Value::Number(30.into())),
            ] {
                let key = Value::String(key.to_string());
                if !map.contains_key(&key) {
                    map.insert(key, default);
                    changed = true;
                }
            }

            if changed {
                let serialized = serde_yaml::to_string(&yaml).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to serialize updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;

                fs::write(&conf_file, serialized).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to write updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;

                success(format!(
                    "Migration applied: {}: added quick-booking window parameters to config.",
                    version
                ));
            }
        }
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added quick-booking window parameters to config')",
        [version],
    )?;

    Ok(())
}
