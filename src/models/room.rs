use super::room_state::RoomState;
use crate::utils::time::format_datetime_display;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the `rooms` table. Rooms are provisioned once at init time
/// and never deleted; only the booking fields and `state` change.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: i64,
    pub number: String,         // ⇔ rooms.number (TEXT, unique)
    pub state: RoomState,       // ⇔ rooms.state ('free'|'reserved'|'occupied')
    pub occupant: Option<String>,
    pub start_time: Option<NaiveDateTime>, // ⇔ rooms.start_time (TEXT ISO-8601)
    pub end_time: Option<NaiveDateTime>,   // ⇔ rooms.end_time (TEXT ISO-8601)
    pub rate: Option<f64>,
    pub identity_document: Option<String>,
    pub address: Option<String>,
    pub agent: Option<String>,
    pub notes: Option<String>,
    pub cleaned: bool, // housekeeping flag, independent of occupancy
}

impl Room {
    /// The active/reserved interval, present only when both bounds are set.
    /// The write boundary guarantees both-or-neither, but rows written by
    /// older tools may be ragged, hence the joint check.
    pub fn interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.start_time, self.end_time) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        }
    }

    pub fn start_display(&self) -> String {
        self.start_time.map(format_datetime_display).unwrap_or_default()
    }

    pub fn end_display(&self) -> String {
        self.end_time.map(format_datetime_display).unwrap_or_default()
    }
}
