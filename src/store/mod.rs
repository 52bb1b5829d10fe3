//! Booking persistence: the record schema, storage backends, and the
//! repository that reads and writes the whole collection.

pub mod backend;
pub mod repository;
pub mod types;
