use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::release::ReleaseLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Release { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        ReleaseLogic::apply(&mut pool, *id)?;
    }

    Ok(())
}
