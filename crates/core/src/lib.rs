//! Domain types shared by the survey backend and its clients.
//!
//! Nothing in this crate performs I/O. The `db` crate persists these types,
//! the `api` crate serves them over HTTP and the `client` crate consumes them.

pub mod accessory;
pub mod error;
pub mod survey;
pub mod types;
