use std::sync::Arc;

use chrono::{DateTime, Utc};

use playground_core::{CustomerId, InvoiceId};

use crate::error::RepositoryError;

/// One stored snapshot: opaque payload plus the keys it was stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRecord {
    pub invoice_id: InvoiceId,
    pub customer_id: CustomerId,
    pub saved_at: DateTime<Utc>,
    pub payload: Vec<u8>,
}

/// Keyed storage of encoded invoice snapshots.
///
/// `put` replaces any earlier record for the same invoice. The store never
/// looks inside the payload.
pub trait SnapshotStore: Send + Sync {
    fn put(&self, record: SnapshotRecord) -> Result<(), RepositoryError>;

    fn get(&self, invoice_id: InvoiceId) -> Result<Option<SnapshotRecord>, RepositoryError>;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn put(&self, record: SnapshotRecord) -> Result<(), RepositoryError> {
        (**self).put(record)
    }

    fn get(&self, invoice_id: InvoiceId) -> Result<Option<SnapshotRecord>, RepositoryError> {
        (**self).get(invoice_id)
    }
}
