use std::collections::HashMap;
use std::sync::RwLock;

use playground_core::InvoiceId;

use super::r#trait::{SnapshotRecord, SnapshotStore};
use crate::error::RepositoryError;

/// In-memory snapshot store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    records: RwLock<HashMap<InvoiceId, SnapshotRecord>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn put(&self, record: SnapshotRecord) -> Result<(), RepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        records.insert(record.invoice_id, record);
        Ok(())
    }

    fn get(&self, invoice_id: InvoiceId) -> Result<Option<SnapshotRecord>, RepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        Ok(records.get(&invoice_id).cloned())
    }
}
