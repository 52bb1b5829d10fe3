//! Persisted booking record schema.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bookings persist as a JSON array under a single localStorage key. The
//! wire form uses camelCase keys and ISO 8601 date/time strings so the
//! stored layout stays stable and readable in browser dev tools.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One saved reservation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Opaque unique identifier, generated at creation. Immutable.
    pub id: String,
    /// Catalog destination name, or a free-form custom location.
    pub location: String,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Departure date. Always strictly after `check_in` for stored records.
    pub check_out: NaiveDate,
    /// Party size, 1–8, where 8 means "8 or more".
    pub guests: u8,
    /// Stamped once when the booking is created.
    pub created_at: DateTime<Utc>,
    /// Stamped on every successful edit; absent until the first edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Nights between check-in and check-out.
    #[must_use]
    pub fn nights(&self) -> i64 {
        crate::util::dates::nights(self.check_in, self.check_out)
    }
}
