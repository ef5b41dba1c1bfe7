use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clean::CleanLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clean { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        CleanLogic::apply(&mut pool, *id)?;
    }

    Ok(())
}
