//! Quick-booking: same-day reservation from two times of day, with the
//! state inferred from how soon the interval starts.

use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{get_room, set_booking};
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::room_state::RoomState;
use crate::ui::messages::success;
use crate::utils::time::parse_time;
use chrono::{NaiveDateTime, NaiveTime};

pub struct QuickLogic;

impl QuickLogic {
    /// A booking starting "now or soon" skips the reservation phase:
    /// at most `within_min` minutes out (inclusive) → Occupied,
    /// otherwise Reserved.
    pub fn infer_state(start: NaiveDateTime, now: NaiveDateTime, within_min: i64) -> RoomState {
        let delay_minutes = (start - now).num_seconds() / 60;
        if delay_minutes <= within_min {
            RoomState::Occupied
        } else {
            RoomState::Reserved
        }
    }

    /// Quick bookings only accept daytime hours; anything spanning
    /// midnight or starting pre-dawn must go through the full form,
    /// which carries no such restriction.
    pub fn in_window(t: NaiveTime, open: NaiveTime, close: NaiveTime) -> bool {
        open <= t && t <= close
    }

    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        id: i64,
        occupant: &str,
        start_tod: &str,
        end_tod: &str,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        let start_time =
            parse_time(start_tod).ok_or_else(|| AppError::InvalidTime(start_tod.to_string()))?;
        let end_time =
            parse_time(end_tod).ok_or_else(|| AppError::InvalidTime(end_tod.to_string()))?;

        let open = cfg.quick_open_time()?;
        let close = cfg.quick_close_time()?;

        if !Self::in_window(start_time, open, close) || !Self::in_window(end_time, open, close) {
            return Err(AppError::OutsideQuickWindow(format!(
                "times must be between {} and {}; use the full 'book' command for this interval",
                open.format("%H:%M"),
                close.format("%H:%M")
            )));
        }

        let today = now.date();
        let start = today.and_time(start_time);
        let end = today.and_time(end_time);

        let state = Self::infer_state(start, now, cfg.quick_occupied_within_min);

        // No metadata on the quick path: previous rate/identity/etc. on
        // the row are cleared by the full replace.
        let booking = Booking::bare(occupant.to_string(), start, end)?;

        let room = get_room(&pool.conn, id)?;
        set_booking(&pool.conn, id, &booking, state)?;

        audit(
            &pool.conn,
            "quick",
            &room.number,
            &format!("{} for {} ({start_tod} → {end_tod})", state.label(), occupant),
        )?;

        success(format!(
            "Quick booking saved for room {} ({}).",
            room.number,
            state.label().to_lowercase()
        ));
        Ok(())
    }
}
