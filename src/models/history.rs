use serde::Serialize;

/// Immutable archival snapshot of a booking, written by the release
/// transaction and never updated afterwards. Fields are copied verbatim
/// from the room row, so a release of an already-free room yields a row
/// of NULLs tagged with the room number.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub room_number: String,
    pub occupant: Option<String>,
    pub start_time: Option<String>, // raw ISO-8601 text as stored
    pub end_time: Option<String>,
    pub rate: Option<f64>,
    pub identity_document: Option<String>,
    pub address: Option<String>,
    pub agent: Option<String>,
    pub notes: Option<String>,
    pub recorded_at: String, // ISO-8601, set at archive time
}
