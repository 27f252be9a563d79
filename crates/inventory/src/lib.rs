//! Inventory store module.
//!
//! This crate contains the stock state and its operations, implemented as
//! plain synchronous domain logic (no HTTP, no database — persistence is a
//! single JSON file).

pub mod journal;
pub mod persistence;
pub mod store;

pub use journal::Journal;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Store};
