//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Small pure helpers live here so page and component logic stays testable
//! without a browser.

pub mod dates;
