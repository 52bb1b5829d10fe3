//! Application state: form drafts and the bookings page state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data with synchronous transition methods, so the
//! rules they carry are testable without a browser. Pages wrap them in
//! reactive signals.

pub mod booking_form;
pub mod bookings;
