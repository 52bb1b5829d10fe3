use super::*;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn test_now() -> DateTime<Utc> {
    "2025-05-20T12:00:00Z".parse().expect("valid timestamp")
}

fn make_booking(id: &str, location: &str) -> Booking {
    Booking {
        id: id.to_owned(),
        location: location.to_owned(),
        check_in: date(2025, 6, 1),
        check_out: date(2025, 6, 5),
        guests: 2,
        created_at: "2025-05-01T09:00:00Z".parse().expect("valid timestamp"),
        updated_at: None,
    }
}

/// A store seeded with two bookings and a page state loaded from it.
fn loaded_page() -> (BookingStore, BookingsPageState) {
    let store = BookingStore::in_memory();
    store.save(&[make_booking("a", "Joshua Tree"), make_booking("b", "Maine Coastline")]);

    let mut state = BookingsPageState::default();
    state.finish_load(store.load());
    (store, state)
}

// =============================================================
// Loading
// =============================================================

#[test]
fn default_state_is_loading_and_empty() {
    let state = BookingsPageState::default();
    assert!(state.loading);
    assert!(state.bookings.is_empty());
    assert_eq!(state.editing, None);
    assert_eq!(state.delete_pending, None);
    assert_eq!(state.notice, None);
}

#[test]
fn finish_load_installs_collection() {
    let mut state = BookingsPageState::default();
    state.finish_load(vec![make_booking("a", "Joshua Tree")]);
    assert!(!state.loading);
    assert_eq!(state.bookings.len(), 1);
}

// =============================================================
// Edit lifecycle
// =============================================================

#[test]
fn begin_edit_seeds_draft_from_record() {
    let (_store, mut state) = loaded_page();
    state.begin_edit("a");

    let session = state.editing.as_ref().expect("session open");
    assert_eq!(session.id, "a");
    assert_eq!(session.draft.location, "Joshua Tree");
    assert_eq!(session.draft.check_in, Some(date(2025, 6, 1)));
    assert_eq!(session.draft.guests, 2);
    assert!(state.is_editing("a"));
    assert!(!state.is_editing("b"));
}

#[test]
fn begin_edit_on_second_record_discards_first_session() {
    let (_store, mut state) = loaded_page();
    state.begin_edit("a");
    state.begin_edit("b");

    let session = state.editing.as_ref().expect("session open");
    assert_eq!(session.id, "b");
    assert_eq!(session.draft.location, "Maine Coastline");
}

#[test]
fn begin_edit_unknown_id_is_ignored() {
    let (_store, mut state) = loaded_page();
    state.begin_edit("missing");
    assert_eq!(state.editing, None);
}

#[test]
fn cancel_edit_discards_scratch_without_persisting() {
    let (store, mut state) = loaded_page();
    state.begin_edit("a");
    state.cancel_edit();

    assert_eq!(state.editing, None);
    assert_eq!(store.load()[0].location, "Joshua Tree");
}

#[test]
fn update_edit_draft_replaces_scratch() {
    let (_store, mut state) = loaded_page();
    state.begin_edit("a");
    let seed = state.editing.as_ref().expect("session open").draft.clone();

    let mut revised = seed.clone();
    revised.set_check_in(Some(date(2025, 7, 1)));
    revised.guests = 5;
    state.update_edit_draft(revised.clone());

    let session = state.editing.as_ref().expect("session open");
    assert_eq!(session.draft, revised);
    assert_ne!(session.draft, seed);
}

#[test]
fn update_edit_draft_without_session_is_ignored() {
    let (_store, mut state) = loaded_page();
    state.update_edit_draft(BookingDraft::default());
    assert_eq!(state.editing, None);
}

#[test]
fn scratch_survives_arming_a_delete_elsewhere() {
    let (store, mut state) = loaded_page();
    state.begin_edit("a");
    let seed = state.editing.as_ref().expect("session open").draft.clone();

    let mut revised = seed.clone();
    revised.location = "Sedona Red Rocks".to_owned();
    revised.set_check_in(Some(date(2025, 7, 1)));
    revised.set_check_out(Some(date(2025, 7, 6)));
    state.update_edit_draft(revised.clone());

    state.request_delete(&store, "b");

    let session = state.editing.as_ref().expect("session open");
    assert_eq!(session.draft, revised);
    assert_ne!(session.draft, seed);

    state.save_edit(&store, test_now()).expect("valid edit");
    assert_eq!(store.load()[0].location, "Sedona Red Rocks");
}

#[test]
fn save_edit_replaces_fields_and_stamps_updated_at() {
    let (store, mut state) = loaded_page();
    state.begin_edit("a");

    let mut draft = state.editing.as_ref().expect("session open").draft.clone();
    draft.location = "Sedona Red Rocks".to_owned();
    draft.set_check_in(Some(date(2025, 7, 1)));
    draft.set_check_out(Some(date(2025, 7, 6)));
    draft.guests = 5;
    state.update_edit_draft(draft);

    state.save_edit(&store, test_now()).expect("valid edit");

    assert_eq!(state.editing, None);
    let saved = &store.load()[0];
    assert_eq!(saved.id, "a");
    assert_eq!(saved.location, "Sedona Red Rocks");
    assert_eq!(saved.check_in, date(2025, 7, 1));
    assert_eq!(saved.guests, 5);
    assert_eq!(saved.created_at, make_booking("a", "Joshua Tree").created_at);
    assert!(saved.updated_at.is_some_and(|at| at >= test_now()));
    assert_eq!(state.bookings, store.load());
}

#[test]
fn save_edit_validation_error_keeps_session_and_surfaces_notice() {
    let (store, mut state) = loaded_page();
    state.begin_edit("a");

    let mut draft = state.editing.as_ref().expect("session open").draft.clone();
    draft.check_out = draft.check_in;
    state.update_edit_draft(draft);

    let result = state.save_edit(&store, test_now());
    assert_eq!(result, Err(DraftError::CheckOutNotAfterCheckIn));
    assert!(state.is_editing("a"));
    assert_eq!(state.notice.as_deref(), Some("Cannot save: check-out must be after check-in."));
    assert_eq!(store.load()[0].location, "Joshua Tree");
    assert_eq!(store.load()[0].updated_at, None);
}

#[test]
fn save_edit_on_vanished_record_raises_notice_and_resyncs() {
    let (store, mut state) = loaded_page();
    state.begin_edit("a");

    // Another tab deleted "a" after this page loaded.
    store.save(&[make_booking("b", "Maine Coastline")]);

    state.save_edit(&store, test_now()).expect("stale save is not an error");

    assert_eq!(state.editing, None);
    assert_eq!(state.notice.as_deref(), Some(MISSING_BOOKING_NOTICE));
    assert_eq!(state.bookings.len(), 1);
    assert_eq!(store.load().len(), 1);
    assert_eq!(store.load()[0].updated_at, None);
}

#[test]
fn save_edit_without_session_is_a_noop() {
    let (store, mut state) = loaded_page();
    state.save_edit(&store, test_now()).expect("no session");
    assert_eq!(store.load()[0].updated_at, None);
}

// =============================================================
// Two-step delete
// =============================================================

#[test]
fn first_delete_click_arms_without_removing() {
    let (store, mut state) = loaded_page();
    state.request_delete(&store, "a");

    assert!(state.is_delete_pending("a"));
    assert_eq!(state.bookings.len(), 2);
    assert_eq!(store.load().len(), 2);
}

#[test]
fn arming_second_record_disarms_first_without_deleting() {
    let (store, mut state) = loaded_page();
    state.request_delete(&store, "a");
    state.request_delete(&store, "b");

    assert!(!state.is_delete_pending("a"));
    assert!(state.is_delete_pending("b"));
    assert_eq!(store.load().len(), 2);
}

#[test]
fn cancel_disarms_and_leaves_collection_unchanged() {
    let (store, mut state) = loaded_page();
    state.request_delete(&store, "a");
    state.cancel_delete();

    assert_eq!(state.delete_pending, None);
    assert_eq!(store.load().len(), 2);
}

#[test]
fn second_click_on_armed_id_deletes_and_persists() {
    let (store, mut state) = loaded_page();
    state.request_delete(&store, "a");
    state.request_delete(&store, "a");

    assert_eq!(state.delete_pending, None);
    assert_eq!(state.bookings.len(), 1);
    let remaining = store.load();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "b");
}

#[test]
fn confirming_vanished_record_raises_notice_without_writing() {
    let (store, mut state) = loaded_page();
    state.request_delete(&store, "a");

    // Another tab deleted "a" in the meantime.
    store.save(&[make_booking("b", "Maine Coastline")]);

    state.request_delete(&store, "a");

    assert_eq!(state.notice.as_deref(), Some(MISSING_BOOKING_NOTICE));
    assert_eq!(state.delete_pending, None);
    assert_eq!(state.bookings.len(), 1);
    assert_eq!(store.load().len(), 1);
}

#[test]
fn confirmed_delete_closes_edit_session_on_same_record() {
    let (store, mut state) = loaded_page();
    state.begin_edit("a");
    state.request_delete(&store, "a");
    state.request_delete(&store, "a");

    assert_eq!(state.editing, None);
    assert_eq!(store.load().len(), 1);
}

// =============================================================
// Notice
// =============================================================

#[test]
fn dismiss_notice_clears_it() {
    let (store, mut state) = loaded_page();
    state.request_delete(&store, "a");
    store.save(&[make_booking("b", "Maine Coastline")]);
    state.request_delete(&store, "a");
    assert!(state.notice.is_some());

    state.dismiss_notice();
    assert_eq!(state.notice, None);
}
