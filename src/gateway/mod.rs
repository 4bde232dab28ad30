//! Persistence gateway: the durable key/value contract the state is saved
//! through.

pub mod memory;

pub use memory::MemoryStore;

/// Key/value storage that never fails towards the caller.
///
/// A failed read is reported as an absent value; a failed write is dropped.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}
