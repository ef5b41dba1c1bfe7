pub mod backup;
pub mod book;
pub mod clean;
pub mod config;
pub mod db;
pub mod export;
pub mod history;
pub mod init;
pub mod list;
pub mod log;
pub mod quick;
pub mod release;
pub mod show;
