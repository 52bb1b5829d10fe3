//! In-progress booking draft: the unsaved field state shared by the
//! creation form and the in-place editor.
//!
//! DESIGN
//! ======
//! The draft owns the two cross-field rules: the check-in change side effect
//! that advances an invalidated check-out, and the validation gate that
//! keeps every stored record's dates ordered. Create and edit both run this
//! code, so the rules cannot drift between the two forms.

#[cfg(test)]
#[path = "booking_form_test.rs"]
mod booking_form_test;

use chrono::{DateTime, NaiveDate, Utc};

use crate::data::destinations;
use crate::store::repository::BookingStore;
use crate::store::types::Booking;
use crate::util::dates;

/// Select value marking the free-text location path.
pub const CUSTOM_LOCATION: &str = "custom";

/// Smallest allowed party size.
pub const GUESTS_MIN: u8 = 1;

/// Largest selectable party size; this value means "8 or more".
pub const GUESTS_MAX: u8 = 8;

/// Why a draft cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("select a destination")]
    MissingLocation,
    #[error("enter a custom location")]
    MissingCustomLocation,
    #[error("select a check-in date")]
    MissingCheckIn,
    #[error("select a check-out date")]
    MissingCheckOut,
    #[error("check-in cannot be in the past")]
    CheckInInPast,
    #[error("check-out must be after check-in")]
    CheckOutNotAfterCheckIn,
    #[error("guests must be between 1 and 8")]
    GuestsOutOfRange,
}

/// Unsaved form state for one booking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingDraft {
    /// Select value: a catalog name, [`CUSTOM_LOCATION`], or empty.
    pub location: String,
    /// Free-text location, meaningful when `location` is [`CUSTOM_LOCATION`].
    pub custom_location: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u8,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            location: String::new(),
            custom_location: String::new(),
            check_in: None,
            check_out: None,
            guests: GUESTS_MIN,
        }
    }
}

impl BookingDraft {
    /// Seed a draft from a stored record for in-place editing.
    ///
    /// A location outside the catalog resolves to the custom path, so
    /// free-form bookings stay editable.
    #[must_use]
    pub fn from_booking(booking: &Booking) -> Self {
        let (location, custom_location) = if destinations::find(&booking.location).is_some() {
            (booking.location.clone(), String::new())
        } else {
            (CUSTOM_LOCATION.to_owned(), booking.location.clone())
        };
        Self {
            location,
            custom_location,
            check_in: Some(booking.check_in),
            check_out: Some(booking.check_out),
            guests: booking.guests,
        }
    }

    /// The location a record built from this draft would store: the catalog
    /// name, or the trimmed custom text.
    #[must_use]
    pub fn resolved_location(&self) -> &str {
        if self.location == CUSTOM_LOCATION {
            self.custom_location.trim()
        } else {
            &self.location
        }
    }

    /// Apply a check-in change.
    ///
    /// A check-out at or before the new check-in advances to the day after
    /// it. This runs on the change event itself, not at submission, so the
    /// corrected date is visible immediately. Clearing check-in leaves
    /// check-out untouched; the input disables instead.
    pub fn set_check_in(&mut self, check_in: Option<NaiveDate>) {
        self.check_in = check_in;
        if let Some(new_check_in) = check_in {
            if let Some(check_out) = self.check_out {
                if check_out <= new_check_in {
                    self.check_out = Some(dates::next_day(new_check_in));
                }
            }
        }
    }

    /// Apply a check-out change.
    pub fn set_check_out(&mut self, check_out: Option<NaiveDate>) {
        self.check_out = check_out;
    }

    /// Lower bound for the check-out input: check-in when set, else tomorrow.
    #[must_use]
    pub fn check_out_min(&self, today: NaiveDate) -> NaiveDate {
        self.check_in.unwrap_or_else(|| dates::next_day(today))
    }

    /// Check every submission rule against `today`.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self, today: NaiveDate) -> Result<(), DraftError> {
        self.checked_dates(today).map(|_| ())
    }

    /// Build a new record from a valid draft.
    ///
    /// Generates a fresh unique id and stamps `created_at` from `now`;
    /// `updated_at` stays unset until the first edit.
    ///
    /// # Errors
    ///
    /// Returns the first violated submission rule.
    pub fn build(&self, now: DateTime<Utc>) -> Result<Booking, DraftError> {
        let (check_in, check_out) = self.checked_dates(now.date_naive())?;
        Ok(Booking {
            id: uuid::Uuid::new_v4().to_string(),
            location: self.resolved_location().to_owned(),
            check_in,
            check_out,
            guests: self.guests,
            created_at: now,
            updated_at: None,
        })
    }

    /// Run the full rule set and hand back the validated dates.
    fn checked_dates(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), DraftError> {
        if self.location.is_empty() {
            return Err(DraftError::MissingLocation);
        }
        if self.location == CUSTOM_LOCATION && self.custom_location.trim().is_empty() {
            return Err(DraftError::MissingCustomLocation);
        }
        let check_in = self.check_in.ok_or(DraftError::MissingCheckIn)?;
        let check_out = self.check_out.ok_or(DraftError::MissingCheckOut)?;
        if check_in < today {
            return Err(DraftError::CheckInInPast);
        }
        if check_out <= check_in {
            return Err(DraftError::CheckOutNotAfterCheckIn);
        }
        if !(GUESTS_MIN..=GUESTS_MAX).contains(&self.guests) {
            return Err(DraftError::GuestsOutOfRange);
        }
        Ok((check_in, check_out))
    }
}

/// Append a validated draft to the stored collection.
///
/// All-or-nothing: a validation failure leaves storage untouched. On
/// success the new record lands at the end of the collection and the whole
/// collection is written back.
///
/// # Errors
///
/// Returns the first violated submission rule.
pub fn submit_booking(
    store: &BookingStore,
    draft: &BookingDraft,
    now: DateTime<Utc>,
) -> Result<Booking, DraftError> {
    let booking = draft.build(now)?;
    let mut bookings = store.load();
    bookings.push(booking.clone());
    store.save(&bookings);
    Ok(booking)
}

/// Display label for a party size: "1 Guest", "2 Guests", "8+ Guests".
#[must_use]
pub fn guest_label(guests: u8) -> String {
    match guests {
        1 => "1 Guest".to_owned(),
        g if g >= GUESTS_MAX => format!("{GUESTS_MAX}+ Guests"),
        g => format!("{g} Guests"),
    }
}
