use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_first_room")]
    pub first_room: u32,
    #[serde(default = "default_room_count")]
    pub room_count: u32,
    #[serde(default = "default_quick_open")]
    pub quick_open: String,
    #[serde(default = "default_quick_close")]
    pub quick_close: String,
    #[serde(default = "default_quick_within")]
    pub quick_occupied_within_min: i64,
}

fn default_first_room() -> u32 {
    101
}
fn default_room_count() -> u32 {
    10
}
fn default_quick_open() -> String {
    "06:00".to_string()
}
fn default_quick_close() -> String {
    "23:59".to_string()
}
fn default_quick_within() -> i64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            first_room: default_first_room(),
            room_count: default_room_count(),
            quick_open: default_quick_open(),
            quick_close: default_quick_close(),
            quick_occupied_within_min: default_quick_within(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("roomdesk")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".roomdesk")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("roomdesk.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("roomdesk.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Opening bound of the quick-booking window.
    pub fn quick_open_time(&self) -> AppResult<NaiveTime> {
        NaiveTime::parse_from_str(&self.quick_open, "%H:%M")
            .map_err(|_| AppError::Config(format!("invalid quick_open: {}", self.quick_open)))
    }

    /// Closing bound of the quick-booking window.
    pub fn quick_close_time(&self) -> AppResult<NaiveTime> {
        NaiveTime::parse_from_str(&self.quick_close, "%H:%M")
            .map_err(|_| AppError::Config(format!("invalid quick_close: {}", self.quick_close)))
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode so test runs never
        // clobber a real installation)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
