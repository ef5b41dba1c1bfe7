use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;

pub struct BackupLogic;

impl BackupLogic {
    /// Plain file copy of the database. The connection is only used to
    /// write the audit line afterwards.
    pub fn backup(pool: &mut DbPool, cfg: &Config, dest_file: &str, force: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !force {
            warning(format!(
                "The file '{}' already exists. Use --force to overwrite.",
                dest.display()
            ));
            return Ok(());
        }

        fs::copy(src, dest)?;

        audit(
            &pool.conn,
            "backup",
            &dest.display().to_string(),
            "Database backup created",
        )?;

        success(format!("Backup created: {}", dest.display()));
        Ok(())
    }
}
