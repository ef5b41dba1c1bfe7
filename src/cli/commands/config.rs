use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(cfg).unwrap_or_else(|_| "<unserializable>".into())
            );
        }

        // ---- CHECK ----
        if *check {
            let missing = migrate::missing_keys()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Configuration file is missing: {}. Run 'roomdesk config --migrate'.",
                    missing.join(", ")
                ));
            }
        }

        // ---- MIGRATE ----
        if *run_migrate {
            let pool = DbPool::new(&cfg.database)?;
            migrate::migrate_add_quick_window(&pool.conn)?;
            success("Configuration migrations completed.");
        }
    }

    Ok(())
}
