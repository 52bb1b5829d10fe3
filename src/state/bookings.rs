//! Bookings page state machine: loading, viewing, one in-flight edit, one
//! armed delete.
//!
//! DESIGN
//! ======
//! `editing` and `delete_pending` are single `Option`s: at most one edit
//! session and one armed delete exist at a time. Starting a second edit
//! discards the first session's scratch unsaved; arming a second delete
//! disarms the first. The session scratch is live: the editor reports
//! every field change back into it, so a re-rendered editor reseeds from
//! the latest input. Every persisted mutation is read-entire, transform,
//! write-entire against the store. A target id missing from the freshly
//! loaded collection leaves storage untouched, re-syncs the list, and
//! raises a notice instead of failing.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use chrono::{DateTime, Utc};

use crate::state::booking_form::{BookingDraft, DraftError};
use crate::store::repository::BookingStore;
use crate::store::types::Booking;

/// Notice shown when an edit or delete targets a vanished record.
pub const MISSING_BOOKING_NOTICE: &str = "That booking no longer exists.";

/// Scratch state for the one record being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    /// Id of the record under edit.
    pub id: String,
    /// Live scratch for the record's editable fields, following every
    /// change the editor reports; persisted data stays untouched until
    /// save.
    pub draft: BookingDraft,
}

/// Everything the bookings page renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingsPageState {
    /// The loaded collection, in stored order.
    pub bookings: Vec<Booking>,
    /// True until the initial, artificially delayed load lands.
    pub loading: bool,
    /// The one in-flight edit session, if any.
    pub editing: Option<EditSession>,
    /// Id of the one record whose delete is armed, if any.
    pub delete_pending: Option<String>,
    /// Stale-target notice, shown until dismissed.
    pub notice: Option<String>,
}

impl Default for BookingsPageState {
    fn default() -> Self {
        Self {
            bookings: Vec::new(),
            loading: true,
            editing: None,
            delete_pending: None,
            notice: None,
        }
    }
}

impl BookingsPageState {
    /// Install the loaded collection and leave the loading state.
    pub fn finish_load(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
        self.loading = false;
    }

    /// True when `id` is the record under edit.
    #[must_use]
    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|session| session.id == id)
    }

    /// True when `id` is the record with an armed delete.
    #[must_use]
    pub fn is_delete_pending(&self, id: &str) -> bool {
        self.delete_pending.as_deref() == Some(id)
    }

    /// Start editing `id`, seeding the scratch draft from the record.
    ///
    /// Any other in-flight session is discarded unsaved. Unknown ids are
    /// ignored.
    pub fn begin_edit(&mut self, id: &str) {
        let Some(booking) = self.bookings.iter().find(|b| b.id == id) else {
            return;
        };
        self.editing = Some(EditSession {
            id: id.to_owned(),
            draft: BookingDraft::from_booking(booking),
        });
    }

    /// Drop the scratch draft without persisting anything.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Replace the session scratch with the latest field state.
    ///
    /// The editor calls this on every field change, so the scratch always
    /// reproduces what the user typed and a re-rendered editor reseeds
    /// with nothing lost. Ignored when no session is open.
    pub fn update_edit_draft(&mut self, draft: BookingDraft) {
        if let Some(session) = self.editing.as_mut() {
            session.draft = draft;
        }
    }

    /// Validate the session scratch and persist it over the record under
    /// edit.
    ///
    /// On success the scratch fields replace the record's editable fields
    /// within the freshly loaded collection (id and `created_at` are
    /// preserved), `updated_at` is stamped from `now`, and the whole
    /// collection is written back. A validation error keeps the session
    /// open, leaves storage untouched, and surfaces the violated rule in
    /// the notice. A vanished target re-syncs the list and raises
    /// [`MISSING_BOOKING_NOTICE`].
    ///
    /// # Errors
    ///
    /// Returns the first violated submission rule.
    pub fn save_edit(&mut self, store: &BookingStore, now: DateTime<Utc>) -> Result<(), DraftError> {
        let Some(session) = self.editing.as_ref() else {
            return Ok(());
        };
        let draft = &session.draft;
        if let Err(err) = draft.validate(now.date_naive()) {
            self.notice = Some(format!("Cannot save: {err}."));
            return Err(err);
        }
        let Some(check_in) = draft.check_in else {
            return Err(DraftError::MissingCheckIn);
        };
        let Some(check_out) = draft.check_out else {
            return Err(DraftError::MissingCheckOut);
        };
        let location = draft.resolved_location().to_owned();
        let guests = draft.guests;
        let id = session.id.clone();

        let mut bookings = store.load();
        if let Some(booking) = bookings.iter_mut().find(|b| b.id == id) {
            booking.location = location;
            booking.check_in = check_in;
            booking.check_out = check_out;
            booking.guests = guests;
            booking.updated_at = Some(now);
            store.save(&bookings);
        } else {
            self.notice = Some(MISSING_BOOKING_NOTICE.to_owned());
        }
        self.bookings = bookings;
        self.editing = None;
        Ok(())
    }

    /// Two-step delete entry point.
    ///
    /// The first call on an id arms it, disarming any other. The second
    /// call on the same armed id removes the record and persists the
    /// reduced collection.
    pub fn request_delete(&mut self, store: &BookingStore, id: &str) {
        if self.is_delete_pending(id) {
            self.confirm_delete(store, id);
        } else {
            self.delete_pending = Some(id.to_owned());
        }
    }

    /// Disarm the pending delete without touching the collection.
    pub fn cancel_delete(&mut self) {
        self.delete_pending = None;
    }

    /// Clear the stale-target notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn confirm_delete(&mut self, store: &BookingStore, id: &str) {
        let mut bookings = store.load();
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        if bookings.len() == before {
            self.notice = Some(MISSING_BOOKING_NOTICE.to_owned());
        } else {
            store.save(&bookings);
        }
        if self.is_editing(id) {
            self.editing = None;
        }
        self.bookings = bookings;
        self.delete_pending = None;
    }
}
