use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::release_room;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// High-level business logic for the `release` command: archive the
/// current booking to history, then reset the room to free. The
/// two-phase write itself is a single transaction in the query layer.
pub struct ReleaseLogic;

impl ReleaseLogic {
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let number = release_room(&mut pool.conn, id)?;

        audit(
            &pool.conn,
            "release",
            &number,
            "Booking archived, room reset to free",
        )?;

        success(format!("Room {number} released."));
        Ok(())
    }
}
