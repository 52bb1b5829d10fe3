//! # glampescape
//!
//! Leptos + WASM frontend for a glamping booking site. Bookings live
//! entirely in browser `localStorage`; there is no backend.
//!
//! This crate contains pages, components, application state, the booking
//! record store, and the shared destination catalog.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;
