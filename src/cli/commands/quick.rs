use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::quick::QuickLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Quick same-day booking: two times of day, state inferred.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Quick {
        id,
        occupant,
        from,
        to,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let now = chrono::Local::now().naive_local();
        QuickLogic::apply(&mut pool, cfg, *id, occupant, from, to, now)?;
    }

    Ok(())
}
