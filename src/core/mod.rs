pub mod backup;
pub mod booking;
pub mod clean;
pub mod log;
pub mod logic;
pub mod quick;
pub mod release;
pub mod status;
