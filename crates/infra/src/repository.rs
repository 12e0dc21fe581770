//! Invoice persistence through snapshots.

use chrono::Utc;

use playground_core::{AggregateRoot, CustomerId, DomainError, InvoiceId};
use playground_invoicing::{DomainObjectMapper, Invoice, InvoiceDto, MapperStrategy};

use crate::codec::{JsonSnapshotCodec, SnapshotCodec};
use crate::config::PersistenceConfig;
use crate::error::RepositoryError;
use crate::snapshot_store::{SnapshotRecord, SnapshotStore};

/// Persistence port for the invoice aggregate.
pub trait InvoiceRepository {
    /// Snapshot the invoice and store it, replacing any earlier snapshot.
    fn save(&self, invoice: &Invoice) -> Result<(), RepositoryError>;

    /// Rehydrating aggregates from snapshots is not supported; always fails
    /// with `NotImplemented`.
    fn find_by_customer_id(&self, customer_id: CustomerId) -> Result<Invoice, RepositoryError>;
}

/// Repository that maps invoices to [`InvoiceDto`] snapshots, encodes them and
/// hands the bytes to a [`SnapshotStore`].
#[derive(Debug)]
pub struct SnapshotInvoiceRepository<M, C, S> {
    mapper: M,
    codec: C,
    store: S,
    normalize: bool,
}

impl<M, C, S> SnapshotInvoiceRepository<M, C, S>
where
    M: DomainObjectMapper,
    C: SnapshotCodec,
    S: SnapshotStore,
{
    pub fn new(mapper: M, codec: C, store: S) -> Self {
        Self {
            mapper,
            codec,
            store,
            normalize: true,
        }
    }

    /// Whether snapshot items are sorted by product code before encoding.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Read back the snapshot last saved for `invoice_id`.
    pub fn snapshot(&self, invoice_id: InvoiceId) -> Result<Option<InvoiceDto>, RepositoryError> {
        self.store
            .get(invoice_id)?
            .map(|record| self.codec.decode::<InvoiceDto>(&record.payload))
            .transpose()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: SnapshotStore> SnapshotInvoiceRepository<MapperStrategy, JsonSnapshotCodec, S> {
    /// Repository wired from configuration, with the JSON codec.
    pub fn from_config(config: &PersistenceConfig, store: S) -> Self {
        Self::new(config.mapper, JsonSnapshotCodec, store)
            .with_normalization(config.normalize_snapshots)
    }
}

impl<M, C, S> InvoiceRepository for SnapshotInvoiceRepository<M, C, S>
where
    M: DomainObjectMapper,
    C: SnapshotCodec,
    S: SnapshotStore,
{
    fn save(&self, invoice: &Invoice) -> Result<(), RepositoryError> {
        let mut snapshot: InvoiceDto = self.mapper.map(invoice)?;
        if self.normalize {
            snapshot.normalize();
        }

        let payload = self.codec.encode(&snapshot)?;
        let bytes = payload.len();

        self.store.put(SnapshotRecord {
            invoice_id: *invoice.id(),
            customer_id: invoice.customer_id(),
            saved_at: Utc::now(),
            payload,
        })?;

        tracing::info!(
            aggregate = Invoice::aggregate_type(),
            invoice_id = %invoice.id(),
            customer_id = %invoice.customer_id(),
            lines = snapshot.items.len(),
            bytes,
            "invoice snapshot saved"
        );
        Ok(())
    }

    fn find_by_customer_id(&self, customer_id: CustomerId) -> Result<Invoice, RepositoryError> {
        tracing::warn!(%customer_id, "find_by_customer_id called but not implemented");
        Err(DomainError::not_implemented("loading invoices by customer id").into())
    }
}
