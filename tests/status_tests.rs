//! Library-level tests for the pure status evaluator and the countdown
//! formatting.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use roomdesk::core::status::evaluate;
use roomdesk::models::room::Room;
use roomdesk::models::room_state::RoomState;
use roomdesk::models::status::StatusColor;
use roomdesk::utils::time::format_duration;

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
}

fn room(state: RoomState, start: Option<&str>, end: Option<&str>) -> Room {
    Room {
        id: 1,
        number: "101".to_string(),
        state,
        occupant: Some("Diallo".to_string()),
        start_time: start.map(dt),
        end_time: end.map(dt),
        rate: None,
        identity_document: None,
        address: None,
        agent: None,
        notes: None,
        cleaned: false,
    }
}

#[test]
fn free_room_is_green_with_no_countdown() {
    let r = room(RoomState::Free, None, None);
    let st = evaluate(&r, dt("2025-07-01T10:00"));

    assert_eq!(st.color, StatusColor::Free);
    assert_eq!(st.label, "Free");
    assert_eq!(st.remaining, "");
    assert!(!st.overdue);
}

#[test]
fn reserved_with_past_end_is_elapsed_and_overdue() {
    // end 10 minutes in the past
    let r = room(
        RoomState::Reserved,
        Some("2025-07-01T08:00"),
        Some("2025-07-01T09:50"),
    );
    let st = evaluate(&r, dt("2025-07-01T10:00"));

    assert_eq!(st.color, StatusColor::ElapsedReserved);
    assert!(st.overdue);
    assert_eq!(st.remaining, "");
    assert_eq!(st.label, "Reserved");
}

#[test]
fn reserved_inside_interval_counts_down() {
    let r = room(
        RoomState::Reserved,
        Some("2025-07-01T09:00"),
        Some("2025-07-01T11:30"),
    );
    let st = evaluate(&r, dt("2025-07-01T10:00"));

    assert_eq!(st.color, StatusColor::ActiveReserved);
    assert!(!st.overdue);
    assert_eq!(st.remaining, "1h30");
}

#[test]
fn future_reservation_stays_neutral() {
    // Not yet begun: no highlight and no countdown.
    let r = room(
        RoomState::Reserved,
        Some("2025-07-01T15:00"),
        Some("2025-07-01T18:00"),
    );
    let st = evaluate(&r, dt("2025-07-01T10:00"));

    assert_eq!(st.color, StatusColor::Neutral);
    assert!(!st.overdue);
    assert_eq!(st.remaining, "");
    assert_eq!(st.label, "Reserved");
}

#[test]
fn occupied_with_future_end_counts_down() {
    // end 10 minutes in the future
    let r = room(
        RoomState::Occupied,
        Some("2025-07-01T08:00"),
        Some("2025-07-01T10:10"),
    );
    let st = evaluate(&r, dt("2025-07-01T10:00"));

    assert_eq!(st.color, StatusColor::ActiveOccupied);
    assert!(!st.overdue);
    assert_eq!(st.remaining, "0h10");
}

#[test]
fn occupied_past_end_is_overdue_red() {
    let r = room(
        RoomState::Occupied,
        Some("2025-07-01T08:00"),
        Some("2025-07-01T09:00"),
    );
    let st = evaluate(&r, dt("2025-07-01T10:00"));

    assert_eq!(st.color, StatusColor::OverdueOccupied);
    assert!(st.overdue);
    assert_eq!(st.remaining, "");
}

#[test]
fn occupied_exactly_at_end_still_counts_down() {
    // now == end is the inclusive edge of the active branch
    let r = room(
        RoomState::Occupied,
        Some("2025-07-01T08:00"),
        Some("2025-07-01T10:00"),
    );
    let st = evaluate(&r, dt("2025-07-01T10:00"));

    assert_eq!(st.color, StatusColor::ActiveOccupied);
    assert_eq!(st.remaining, "0h00");
}

#[test]
fn evaluate_is_pure() {
    let r = room(
        RoomState::Occupied,
        Some("2025-07-01T08:00"),
        Some("2025-07-01T12:00"),
    );
    let now = dt("2025-07-01T10:00");

    assert_eq!(evaluate(&r, now), evaluate(&r, now));
}

#[test]
fn format_duration_renders_hours_and_padded_minutes() {
    assert_eq!(format_duration(Duration::seconds(5400)), "1h30");
    assert_eq!(format_duration(Duration::seconds(59)), "0h00");
    assert_eq!(format_duration(Duration::seconds(0)), "0h00");
    assert_eq!(format_duration(Duration::hours(26)), "26h00");
}

#[test]
#[should_panic]
fn format_duration_rejects_negative_deltas() {
    let _ = format_duration(Duration::seconds(-1));
}

#[test]
fn status_colors_map_to_portable_names() {
    assert_eq!(StatusColor::Neutral.css(), "lightgray");
    assert_eq!(StatusColor::Free.css(), "lightgreen");
    assert_eq!(StatusColor::ElapsedReserved.css(), "lightblue");
    assert_eq!(StatusColor::ActiveReserved.css(), "gray");
    assert_eq!(StatusColor::ActiveOccupied.css(), "orange");
    assert_eq!(StatusColor::OverdueOccupied.css(), "red");
}

#[test]
fn interval_requires_both_bounds() {
    let d = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();

    let mut r = room(RoomState::Reserved, Some("2025-07-01T08:00"), None);
    assert!(r.interval().is_none());

    r.end_time = Some(d + Duration::hours(4));
    assert!(r.interval().is_some());
}
