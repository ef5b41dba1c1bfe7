use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{get_room, set_booking};
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::room_state::RoomState;
use crate::ui::messages::success;

/// High-level business logic for the `book` command (full reservation
/// form: occupant, interval, target state and all metadata).
pub struct BookLogic;

impl BookLogic {
    pub fn apply(pool: &mut DbPool, id: i64, booking: Booking, state: RoomState) -> AppResult<()> {
        // A booking written with state Free would break the
        // "Free ⇒ empty booking fields" invariant; reject before write.
        if state.is_free() {
            return Err(AppError::InvalidState(
                "a booking must be 'reserved' or 'occupied'; use 'release' to free a room".into(),
            ));
        }

        // Resolve the room first so a bad id surfaces as NotFound.
        let room = get_room(&pool.conn, id)?;

        set_booking(&pool.conn, id, &booking, state)?;

        audit(
            &pool.conn,
            "book",
            &room.number,
            &format!(
                "{} for {} ({} → {})",
                state.label(),
                booking.occupant,
                booking.start,
                booking.end
            ),
        )?;

        success(format!(
            "Room {} booked ({}) for {}.",
            room.number,
            state.label().to_lowercase(),
            booking.occupant
        ));
        Ok(())
    }
}
