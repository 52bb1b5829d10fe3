//! Static reference data compiled into the app.

pub mod destinations;
