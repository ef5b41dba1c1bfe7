use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::evaluate;
use crate::db::pool::DbPool;
use crate::db::queries::get_room;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, ansi_for_status};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let room = get_room(&pool.conn, *id)?;

        let now = chrono::Local::now().naive_local();
        let status = evaluate(&room, now);
        let color = ansi_for_status(status.color);

        println!("\n=== Room {} ===", room.number);
        println!("State:     {color}{}{RESET}", status.label);
        if status.overdue {
            println!("Overdue:   yes");
        }
        if !status.remaining.is_empty() {
            println!("Remaining: {}", status.remaining);
        }
        println!("Occupant:  {}", room.occupant.as_deref().unwrap_or("--"));
        println!("From:      {}", or_dash(&room.start_display()));
        println!("To:        {}", or_dash(&room.end_display()));
        if let Some(rate) = room.rate {
            println!("Rate:      {rate}");
        }
        if let Some(identity) = &room.identity_document {
            println!("Identity:  {identity}");
        }
        if let Some(address) = &room.address {
            println!("Address:   {address}");
        }
        if let Some(agent) = &room.agent {
            println!("Agent:     {agent}");
        }
        if let Some(notes) = &room.notes {
            println!("Notes:     {notes}");
        }
        println!("Cleaned:   {}", if room.cleaned { "yes" } else { "no" });
    }
    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "--" } else { s }
}
