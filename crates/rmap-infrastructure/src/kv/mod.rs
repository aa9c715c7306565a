//! Key-value backends implementing `rmap_core::storage::KeyValueStore`.

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
