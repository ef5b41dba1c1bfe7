use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RoomState {
    Free,
    Reserved,
    Occupied,
}

impl RoomState {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RoomState::Free => "free",
            RoomState::Reserved => "reserved",
            RoomState::Occupied => "occupied",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "free" => Some(RoomState::Free),
            "reserved" => Some(RoomState::Reserved),
            "occupied" => Some(RoomState::Occupied),
            _ => None,
        }
    }

    /// Helper: convert input from CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        RoomState::from_db_str(&code.to_lowercase())
    }

    /// Human-readable name, shown on the board regardless of sub-case.
    pub fn label(&self) -> &'static str {
        match self {
            RoomState::Free => "Free",
            RoomState::Reserved => "Reserved",
            RoomState::Occupied => "Occupied",
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, RoomState::Free)
    }
}
