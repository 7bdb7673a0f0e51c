//! SQLite backend for the vitae profile store.
//!
//! All database access goes through [`tokio_rusqlite`], which owns the
//! connection on a dedicated thread and keeps the async runtime unblocked.
//! One table per section kind keeps every column typed and every display
//! ordering a plain `ORDER BY`.

mod encode;
mod schema;
mod sections;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
