//! Storage backends for encoded invoice snapshots.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemorySnapshotStore;
pub use r#trait::{SnapshotRecord, SnapshotStore};
