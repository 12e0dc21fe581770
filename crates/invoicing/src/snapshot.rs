//! Flat, storage-shaped snapshots of invoicing domain objects.
//!
//! Snapshots carry no invariants of their own. They are produced by a mapper
//! (see [`crate::mapper`]) and never flow back into the aggregate.

use serde::{Deserialize, Serialize};

use playground_core::{CustomerId, DomainError, DomainResult, InvoiceId};

/// Snapshot of one invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceItemDto {
    /// 1-based line number, unique only within its invoice.
    pub invoice_item_id: u32,
    pub product_code: String,
    pub quantity: i32,
}

/// Snapshot of an invoice aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDto {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub items: Vec<InvoiceItemDto>,
}

impl InvoiceDto {
    pub fn new(id: InvoiceId, customer_id: CustomerId) -> Self {
        Self {
            id,
            customer_id,
            items: Vec::new(),
        }
    }

    /// Append a line, numbering it after the last line present.
    ///
    /// Fails if the last line number is already `u32::MAX`.
    pub fn push_item(
        &mut self,
        product_code: impl Into<String>,
        quantity: i32,
    ) -> DomainResult<()> {
        let invoice_item_id = self.next_item_id()?;
        self.items.push(InvoiceItemDto {
            invoice_item_id,
            product_code: product_code.into(),
            quantity,
        });
        Ok(())
    }

    /// Sort items by product code and renumber them from 1.
    ///
    /// Item order otherwise follows the aggregate's internal iteration order,
    /// which is unspecified.
    pub fn normalize(&mut self) {
        self.items
            .sort_by(|a, b| a.product_code.cmp(&b.product_code));
        for (n, item) in (1u32..).zip(self.items.iter_mut()) {
            item.invoice_item_id = n;
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    fn next_item_id(&self) -> DomainResult<u32> {
        match self.items.last() {
            None => Ok(1),
            Some(last) => last
                .invoice_item_id
                .checked_add(1)
                .ok_or_else(|| DomainError::invariant("invoice item id overflow")),
        }
    }
}

/// Any snapshot a mapper can produce.
///
/// Closed set: adding a snapshot kind means adding a variant here and a
/// [`Snapshot`] impl for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnySnapshot {
    Invoice(InvoiceDto),
    InvoiceItem(InvoiceItemDto),
}

impl AnySnapshot {
    pub fn kind(&self) -> &'static str {
        match self {
            AnySnapshot::Invoice(_) => InvoiceDto::KIND,
            AnySnapshot::InvoiceItem(_) => InvoiceItemDto::KIND,
        }
    }
}

/// A concrete snapshot type that can be extracted from [`AnySnapshot`].
pub trait Snapshot: Sized {
    /// Name used in `TypeMismatch` errors.
    const KIND: &'static str;

    fn from_any(snapshot: AnySnapshot) -> DomainResult<Self>;
}

impl Snapshot for InvoiceDto {
    const KIND: &'static str = "InvoiceDto";

    fn from_any(snapshot: AnySnapshot) -> DomainResult<Self> {
        match snapshot {
            AnySnapshot::Invoice(dto) => Ok(dto),
            other => Err(DomainError::type_mismatch(Self::KIND, other.kind())),
        }
    }
}

impl Snapshot for InvoiceItemDto {
    const KIND: &'static str = "InvoiceItemDto";

    fn from_any(snapshot: AnySnapshot) -> DomainResult<Self> {
        match snapshot {
            AnySnapshot::InvoiceItem(dto) => Ok(dto),
            other => Err(DomainError::type_mismatch(Self::KIND, other.kind())),
        }
    }
}
