use crate::core::status;
use crate::db::pool::DbPool;
use crate::db::queries::list_rooms;
use crate::errors::AppResult;
use crate::models::room::Room;
use crate::models::status::DisplayStatus;
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// The whole board in one consistent snapshot: every room evaluated
    /// against the same `now`.
    pub fn rooms_with_status(
        pool: &mut DbPool,
        now: NaiveDateTime,
    ) -> AppResult<Vec<(Room, DisplayStatus)>> {
        let rooms = list_rooms(pool)?;

        Ok(rooms
            .into_iter()
            .map(|room| {
                let st = status::evaluate(&room, now);
                (room, st)
            })
            .collect())
    }
}
