//! AggieSource Core
//!
//! Layered architecture:
//! - domain: Records stored in the browser and the rules for building them
//! - storage: Key-value store abstraction, typed collections and seed data
//! - services: Per-feature read-modify-write operations used by the UI

pub mod domain;
pub mod storage;
pub mod services;

#[cfg(test)]
mod scenarios;

pub use domain::{DomainError, DomainResult};
pub use storage::{KeyValueStore, MemoryStore, StoreExt};
