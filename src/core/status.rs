//! Status evaluator: pure derivation of the board attributes for one
//! room at one instant. No side effects, no clock access; the caller
//! picks a single `now` for the whole board so rooms never straddle a
//! boundary mid-render.

use crate::models::room::Room;
use crate::models::room_state::RoomState;
use crate::models::status::{DisplayStatus, StatusColor};
use crate::utils::time::format_duration;
use chrono::NaiveDateTime;

/// Derive `(color, label, remaining, overdue)` from a room and the
/// current wall-clock time.
///
/// Precedence of the rules:
/// 1. Free → green, no countdown.
/// 2. Reserved, end already past → blue, overdue.
///    Reserved, interval running → gray with countdown.
///    Reserved, not yet begun → neutral, no countdown or highlight.
/// 3. Occupied, end not yet reached → orange with countdown.
///    Occupied, end past → red, overdue.
///
/// Rooms in Reserved/Occupied with a missing interval fall through to
/// neutral; the write boundary prevents new rows like that.
pub fn evaluate(room: &Room, now: NaiveDateTime) -> DisplayStatus {
    let label = room.state.label();

    let mut color = StatusColor::Neutral;
    let mut remaining = String::new();
    let mut overdue = false;

    match room.state {
        RoomState::Free => {
            color = StatusColor::Free;
        }
        RoomState::Reserved => {
            if let Some((start, end)) = room.interval() {
                if end < now {
                    color = StatusColor::ElapsedReserved;
                    overdue = true;
                } else if start <= now && now <= end {
                    color = StatusColor::ActiveReserved;
                    remaining = format_duration(end - now);
                }
                // now < start: reservation not yet begun, stays neutral
            }
        }
        RoomState::Occupied => {
            if let Some((_, end)) = room.interval() {
                if now <= end {
                    color = StatusColor::ActiveOccupied;
                    remaining = format_duration(end - now);
                } else {
                    color = StatusColor::OverdueOccupied;
                    overdue = true;
                }
            }
        }
    }

    DisplayStatus {
        color,
        label,
        remaining,
        overdue,
    }
}
