//! Store adapters implementing the persistence ports.

mod memory;

pub use memory::MemoryStore;
