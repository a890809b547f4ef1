//! In-memory repositories

mod store;

pub use store::MemoryStore;
