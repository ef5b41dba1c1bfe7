pub mod booking;
pub mod history;
pub mod room;
pub mod room_state;
pub mod status;
