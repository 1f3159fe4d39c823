//! Profile persistence adapters

pub mod memory;

pub use memory::InMemoryProfileStore;
