use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{get_room, toggle_cleaned};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Housekeeping flag toggle. Independent of the occupancy lifecycle.
pub struct CleanLogic;

impl CleanLogic {
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let room = get_room(&pool.conn, id)?;
        let cleaned = toggle_cleaned(&pool.conn, id)?;

        let label = if cleaned { "cleaned" } else { "not cleaned" };

        audit(
            &pool.conn,
            "clean",
            &room.number,
            &format!("Marked {label}"),
        )?;

        success(format!("Room {} marked {label}.", room.number));
        Ok(())
    }
}
