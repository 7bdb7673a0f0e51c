//! Core types and the store abstraction for vitae profiles.
//!
//! Everything here is plain data plus one trait. HTTP lives in
//! `vitae-api`, persistence in `vitae-store-sqlite`; both depend on this
//! crate and this crate depends on neither.

pub mod error;
pub mod profile;
pub mod section;
pub mod store;
pub mod view;

pub use error::{Error, Result};
