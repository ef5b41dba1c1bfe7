use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::list_history;
use crate::errors::AppResult;
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::History) {
        let mut pool = DbPool::new(&cfg.database)?;
        let entries = list_history(&mut pool)?;

        if entries.is_empty() {
            println!("No archived bookings yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ROOM", 6),
            Column::new("OCCUPANT", 20),
            Column::new("FROM", 17),
            Column::new("TO", 17),
            Column::new("RATE", 10),
            Column::new("AGENT", 12),
            Column::new("RECORDED", 20),
        ]);

        for e in &entries {
            table.add_row(vec![
                e.room_number.clone(),
                colorize_optional(e.occupant.as_deref().unwrap_or("")),
                colorize_optional(e.start_time.as_deref().unwrap_or("")),
                colorize_optional(e.end_time.as_deref().unwrap_or("")),
                colorize_optional(&e.rate.map(|r| r.to_string()).unwrap_or_default()),
                colorize_optional(e.agent.as_deref().unwrap_or("")),
                e.recorded_at.clone(),
            ]);
        }

        println!("\n{}", table.render());
    }

    Ok(())
}
