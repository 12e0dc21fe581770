use anyhow::Context;

use playground_core::{CustomerId, InvoiceId};
use playground_infra::{
    InMemorySnapshotStore, InvoiceRepository, PersistenceConfig, SnapshotInvoiceRepository,
};
use playground_invoicing::{Invoice, ProductCode, ProductQuantity};

fn main() -> anyhow::Result<()> {
    playground_observability::init();

    let config = PersistenceConfig::from_env().context("invalid persistence configuration")?;
    tracing::info!(mapper = %config.mapper, normalize = config.normalize_snapshots, "starting");

    let mut invoice = Invoice::new(InvoiceId::new(), CustomerId::new())?;
    invoice.add_line(ProductCode::new("ABIB123")?, ProductQuantity::new(100)?)?;
    invoice.add_line(ProductCode::new("MIKE456")?, ProductQuantity::new(150)?)?;

    let repo = SnapshotInvoiceRepository::from_config(&config, InMemorySnapshotStore::new());
    repo.save(&invoice).context("failed to save invoice")?;

    if let Some(snapshot) = repo.snapshot(invoice.id_typed())? {
        tracing::info!(
            invoice_id = %snapshot.id,
            items = snapshot.items.len(),
            "snapshot stored"
        );
    }

    Ok(())
}
