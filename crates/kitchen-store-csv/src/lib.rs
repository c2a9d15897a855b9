//! Flat-file CSV backend for the kitchen recipe catalog.
//!
//! Each table lives in its own CSV file under the data directory; attached
//! images and videos are copied into a managed media directory. Every call
//! re-reads the file it needs and every write replaces the whole file
//! atomically.

mod encode;
mod media;
mod schema;
mod seed;
mod store;
mod table;

pub mod config;
pub mod error;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use schema::TableKind;
pub use store::CsvStore;

#[cfg(test)]
mod tests;
