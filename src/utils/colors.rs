//! ANSI color helper utilities for terminal output.

use crate::models::status::StatusColor;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Terminal rendering of the board colors. Yellow stands in for
/// orange, the closest 8-color match.
pub fn ansi_for_status(color: StatusColor) -> &'static str {
    match color {
        StatusColor::Neutral => GREY,
        StatusColor::Free => GREEN,
        StatusColor::ElapsedReserved => BLUE,
        StatusColor::ActiveReserved => CYAN,
        StatusColor::ActiveOccupied => YELLOW,
        StatusColor::OverdueOccupied => RED,
    }
}

/// Grey out empty cell values on the board.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
