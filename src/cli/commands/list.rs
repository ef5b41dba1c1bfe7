use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::room::Room;
use crate::models::status::DisplayStatus;
use crate::utils::colors::{RESET, ansi_for_status, colorize_optional};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let mut pool = DbPool::new(&cfg.database)?;

        // One snapshot of `now` for the whole board, so two rooms with
        // the same end time can never render on opposite sides of it.
        let now = chrono::Local::now().naive_local();
        let board = Core::rooms_with_status(&mut pool, now)?;

        print_board(&board);
    }
    Ok(())
}

fn print_board(board: &[(Room, DisplayStatus)]) {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("ROOM", 6),
        Column::new("STATE", 12),
        Column::new("OCCUPANT", 20),
        Column::new("FROM", 17),
        Column::new("TO", 17),
        Column::new("REMAINING", 10),
        Column::new("CLEANED", 8),
    ]);

    for (room, status) in board {
        let color = ansi_for_status(status.color);
        let state_cell = if status.overdue {
            format!("{color}{} !{RESET}", status.label)
        } else {
            format!("{color}{}{RESET}", status.label)
        };

        table.add_row(vec![
            room.id.to_string(),
            room.number.clone(),
            state_cell,
            colorize_optional(room.occupant.as_deref().unwrap_or("")),
            colorize_optional(&room.start_display()),
            colorize_optional(&room.end_display()),
            colorize_optional(&status.remaining),
            if room.cleaned { "yes".into() } else { "no".into() },
        ]);
    }

    println!("\n{}", table.render());
}
