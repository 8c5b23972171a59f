// src/lib.rs
//! Auction item registry.
//!
//! A single append-only list of [`Item`]s behind a reader/writer lock.
//! Writers append under the exclusive lock; lookups by name scan under the
//! shared lock and may run in parallel with each other.

pub mod item;
pub mod registry;

#[cfg(feature = "logging")]
pub mod logging;

pub use item::Item;
pub use registry::ItemRegistry;
