//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and booking surfaces while reading shared
//! state passed down from the pages that own it.

pub mod booking_card;
pub mod booking_edit_form;
pub mod destination_card;
pub mod footer;
pub mod nav_bar;
