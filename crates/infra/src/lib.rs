//! Infrastructure layer: snapshot persistence, serialization, config.

pub mod codec;
pub mod config;
pub mod error;
pub mod repository;
pub mod snapshot_store;

pub use codec::{JsonSnapshotCodec, SnapshotCodec};
pub use config::{ConfigError, PersistenceConfig};
pub use error::RepositoryError;
pub use repository::{InvoiceRepository, SnapshotInvoiceRepository};
pub use snapshot_store::{InMemorySnapshotStore, SnapshotRecord, SnapshotStore};
