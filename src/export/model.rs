// src/export/model.rs

use crate::models::history::HistoryEntry;
use serde::Serialize;

/// Flat row for history export. Optional fields serialize as empty
/// strings in CSV rather than skipping columns.
#[derive(Serialize, Clone, Debug)]
pub struct HistoryExport {
    pub id: i64,
    pub room_number: String,
    pub occupant: String,
    pub start_time: String,
    pub end_time: String,
    pub rate: String,
    pub identity_document: String,
    pub address: String,
    pub agent: String,
    pub notes: String,
    pub recorded_at: String,
}

impl From<&HistoryEntry> for HistoryExport {
    fn from(h: &HistoryEntry) -> Self {
        Self {
            id: h.id,
            room_number: h.room_number.clone(),
            occupant: h.occupant.clone().unwrap_or_default(),
            start_time: h.start_time.clone().unwrap_or_default(),
            end_time: h.end_time.clone().unwrap_or_default(),
            rate: h.rate.map(|r| r.to_string()).unwrap_or_default(),
            identity_document: h.identity_document.clone().unwrap_or_default(),
            address: h.address.clone().unwrap_or_default(),
            agent: h.agent.clone().unwrap_or_default(),
            notes: h.notes.clone().unwrap_or_default(),
            recorded_at: h.recorded_at.clone(),
        }
    }
}
