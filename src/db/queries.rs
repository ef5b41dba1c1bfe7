use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::history::HistoryEntry;
use crate::models::room::Room;
use crate::models::room_state::RoomState;
use crate::utils::time::{format_datetime_db, parse_datetime};
use chrono::Local;
use rusqlite::{Connection, Result, Row, params};

/// Map one `rooms` row into a `Room`.
pub fn map_row(row: &Row) -> Result<Room> {
    let state_str: String = row.get("state")?;
    let state = RoomState::from_db_str(&state_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidState(state_str.clone())),
        )
    })?;

    let start_raw: Option<String> = row.get("start_time")?;
    let end_raw: Option<String> = row.get("end_time")?;

    let start_time = match start_raw {
        Some(ref s) => Some(parse_datetime(s).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?),
        None => None,
    };
    let end_time = match end_raw {
        Some(ref s) => Some(parse_datetime(s).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?),
        None => None,
    };

    Ok(Room {
        id: row.get("id")?,
        number: row.get("number")?,
        state,
        occupant: row.get("occupant")?,
        start_time,
        end_time,
        rate: row.get("rate")?,
        identity_document: row.get("identity_document")?,
        address: row.get("address")?,
        agent: row.get("agent")?,
        notes: row.get("notes")?,
        cleaned: row.get::<_, i64>("cleaned")? == 1,
    })
}

/// All rooms, ordered by number ascending. Room numbers are fixed-width,
/// so lexical order matches numeric order.
pub fn list_rooms(pool: &mut DbPool) -> AppResult<Vec<Room>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM rooms ORDER BY number ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_room(conn: &Connection, id: i64) -> AppResult<Room> {
    let mut stmt = conn.prepare_cached("SELECT * FROM rooms WHERE id = ?1")?;

    stmt.query_row([id], map_row)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => AppError::RoomNotFound(id),
            other => AppError::Db(other),
        })
}

/// Full replace of the booking fields and state for a room. Last writer
/// wins; both the full-form and the quick path end up here.
pub fn set_booking(
    conn: &Connection,
    id: i64,
    booking: &Booking,
    state: RoomState,
) -> AppResult<()> {
    let updated = conn.execute(
        "UPDATE rooms
         SET occupant = ?1, start_time = ?2, end_time = ?3, state = ?4,
             rate = ?5, identity_document = ?6, address = ?7, agent = ?8, notes = ?9
         WHERE id = ?10",
        params![
            booking.occupant,
            format_datetime_db(booking.start),
            format_datetime_db(booking.end),
            state.to_db_str(),
            booking.rate,
            booking.identity_document,
            booking.address,
            booking.agent,
            booking.notes,
            id,
        ],
    )?;

    if updated == 0 {
        return Err(AppError::RoomNotFound(id));
    }
    Ok(())
}

/// Archive-on-release: copy the room's current booking into `history`,
/// then reset the room to free. Both statements run in one transaction
/// so no reader ever observes a cleared room without its history row
/// (or the reverse). `cleaned` is deliberately untouched.
///
/// Releasing an already-free room archives a row of NULLs tagged with
/// the room number.
pub fn release_room(conn: &mut Connection, id: i64) -> AppResult<String> {
    let tx = conn.transaction()?;

    let archived = tx.execute(
        "INSERT INTO history (
            room_number, occupant, start_time, end_time,
            rate, identity_document, address, agent, notes, recorded_at
        )
        SELECT number, occupant, start_time, end_time,
               rate, identity_document, address, agent, notes, ?1
        FROM rooms
        WHERE id = ?2",
        params![Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string(), id],
    )?;

    if archived == 0 {
        // no such room; transaction rolls back on drop
        return Err(AppError::RoomNotFound(id));
    }

    tx.execute(
        "UPDATE rooms SET
            state = 'free',
            occupant = NULL,
            start_time = NULL,
            end_time = NULL,
            rate = NULL,
            identity_document = NULL,
            address = NULL,
            agent = NULL,
            notes = NULL
         WHERE id = ?1",
        [id],
    )?;

    let number: String = tx.query_row("SELECT number FROM rooms WHERE id = ?1", [id], |row| {
        row.get(0)
    })?;

    tx.commit()?;
    Ok(number)
}

/// Flip the housekeeping flag in a single update, without reading the
/// current value first. Returns the new value.
pub fn toggle_cleaned(conn: &Connection, id: i64) -> AppResult<bool> {
    let updated = conn.execute("UPDATE rooms SET cleaned = 1 - cleaned WHERE id = ?1", [id])?;

    if updated == 0 {
        return Err(AppError::RoomNotFound(id));
    }

    let cleaned: i64 =
        conn.query_row("SELECT cleaned FROM rooms WHERE id = ?1", [id], |row| row.get(0))?;
    Ok(cleaned == 1)
}

fn map_history_row(row: &Row) -> Result<HistoryEntry> {
    Ok(HistoryEntry {
        id: row.get("id")?,
        room_number: row.get("room_number")?,
        occupant: row.get("occupant")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        rate: row.get("rate")?,
        identity_document: row.get("identity_document")?,
        address: row.get("address")?,
        agent: row.get("agent")?,
        notes: row.get("notes")?,
        recorded_at: row.get("recorded_at")?,
    })
}

/// All archived bookings, newest first. Never mutated after insert.
pub fn list_history(pool: &mut DbPool) -> AppResult<Vec<HistoryEntry>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM history ORDER BY recorded_at DESC, id DESC")?;

    let rows = stmt.query_map([], map_history_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
