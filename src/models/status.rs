use serde::Serialize;

/// Display color buckets for the room board. Named after the lifecycle
/// sub-case they highlight; `css()` gives a portable color name for
/// exports and web front ends.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum StatusColor {
    /// No highlight. Also the rendering of a reservation that has not
    /// started yet (kept as explicit behavior, see `core::status`).
    Neutral,
    Free,
    ElapsedReserved,
    ActiveReserved,
    ActiveOccupied,
    OverdueOccupied,
}

impl StatusColor {
    pub fn css(&self) -> &'static str {
        match self {
            StatusColor::Neutral => "lightgray",
            StatusColor::Free => "lightgreen",
            StatusColor::ElapsedReserved => "lightblue",
            StatusColor::ActiveReserved => "gray",
            StatusColor::ActiveOccupied => "orange",
            StatusColor::OverdueOccupied => "red",
        }
    }
}

/// Derived, time-dependent view attributes for one room. Computed by
/// `core::status::evaluate` on every listing; never stored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DisplayStatus {
    pub color: StatusColor,
    pub label: &'static str,
    pub remaining: String, // "{hours}h{minutes:02}", empty when not counting down
    pub overdue: bool,
}
