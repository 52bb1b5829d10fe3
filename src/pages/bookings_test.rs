use super::*;

use chrono::{NaiveDate, TimeZone};

use crate::store::types::Booking;

fn make_booking(id: &str) -> Booking {
    Booking {
        id: id.to_owned(),
        location: "Joshua Tree".to_owned(),
        check_in: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        check_out: NaiveDate::from_ymd_opt(2025, 6, 5).expect("valid date"),
        guests: 2,
        created_at: Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap(),
        updated_at: None,
    }
}

#[test]
fn empty_state_waits_for_load() {
    let state = BookingsPageState::default();
    assert!(state.loading);
    assert!(!show_empty_state(state.loading, &state.bookings));
}

#[test]
fn empty_state_shows_after_loading_nothing() {
    let mut state = BookingsPageState::default();
    state.finish_load(Vec::new());
    assert!(show_empty_state(state.loading, &state.bookings));
}

#[test]
fn empty_state_hides_when_bookings_exist() {
    let mut state = BookingsPageState::default();
    state.finish_load(vec![make_booking("b-1")]);
    assert!(!show_empty_state(state.loading, &state.bookings));
}
