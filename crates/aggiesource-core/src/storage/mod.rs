//! Storage Layer
//!
//! Key-value store abstraction, typed collections over it and first-run seed data.

mod traits;
mod memory;
mod collection;
pub mod keys;
pub mod seed;

pub use traits::{KeyValueStore, StoreExt};
pub use memory::MemoryStore;
pub use collection::Collection;
pub use seed::{seed_defaults, SeedReport};
