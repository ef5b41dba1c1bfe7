use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::BookLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::room_state::RoomState;
use crate::utils::time::parse_datetime;

/// Book a room via the full reservation form.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book {
        id,
        occupant,
        from,
        to,
        state,
        rate,
        identity,
        address,
        agent,
        notes,
    } = cmd
    {
        //
        // 1. Parse the interval (mandatory)
        //
        let start = parse_datetime(from)?;
        let end = parse_datetime(to)?;

        //
        // 2. Parse the target state
        //
        let state_final = RoomState::from_code(state).ok_or_else(|| {
            AppError::InvalidState(format!(
                "Invalid state '{}'. Use 'reserved' or 'occupied'",
                state
            ))
        })?;

        //
        // 3. Parse the rate (optional, comma or dot decimals)
        //
        let rate_parsed = Booking::parse_rate(rate.as_deref())?;

        //
        // 4. Build the validated booking value
        //
        let booking = Booking::new(
            occupant.clone(),
            start,
            end,
            rate_parsed,
            identity.clone(),
            address.clone(),
            agent.clone(),
            notes.clone(),
        )?;

        //
        // 5. Open DB and execute
        //
        let mut pool = DbPool::new(&cfg.database)?;
        BookLogic::apply(&mut pool, *id, booking, state_final)?;
    }

    Ok(())
}
