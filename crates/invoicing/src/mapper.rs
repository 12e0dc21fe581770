//! Mapping from domain objects to snapshots.
//!
//! Two interchangeable strategies implement [`DomainObjectMapper`]:
//!
//! - [`VisitorMapper`] traverses the object with an [`InvoiceSnapshotVisitor`].
//! - [`FieldCopyMapper`] uses the object's explicit field mapping
//!   ([`Mappable::copy_fields`]).
//!
//! [`MapperStrategy`] picks one of them at runtime.

use playground_core::{DomainError, DomainResult};

use crate::invoice::{Invoice, InvoiceItem};
use crate::product_code::ProductCode;
use crate::product_quantity::ProductQuantity;
use crate::snapshot::{AnySnapshot, InvoiceDto, InvoiceItemDto, Snapshot};
use crate::visitor::{InvoiceSnapshotVisitor, Visitable};

/// A domain object a mapper may be asked to snapshot.
///
/// Capabilities are opt-in: the defaults report that the object can be
/// neither traversed nor field-copied.
pub trait Mappable {
    /// Name used in error messages.
    fn type_name(&self) -> &'static str;

    fn as_visitable(&self) -> Option<&dyn Visitable> {
        None
    }

    fn copy_fields(&self) -> DomainResult<AnySnapshot> {
        Err(DomainError::mapping(format!(
            "no field mapping defined for {}",
            self.type_name()
        )))
    }
}

pub trait DomainObjectMapper {
    fn map<D, S>(&self, source: &D) -> DomainResult<S>
    where
        D: Mappable + ?Sized,
        S: Snapshot;
}

/// Maps by traversing the source with an [`InvoiceSnapshotVisitor`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VisitorMapper;

impl DomainObjectMapper for VisitorMapper {
    fn map<D, S>(&self, source: &D) -> DomainResult<S>
    where
        D: Mappable + ?Sized,
        S: Snapshot,
    {
        let visitable = source.as_visitable().ok_or_else(|| {
            DomainError::unsupported(format!(
                "cannot map {}: it is not visitable",
                source.type_name()
            ))
        })?;

        let mut visitor = InvoiceSnapshotVisitor::new();
        visitable.accept(&mut visitor);

        tracing::trace!(source = source.type_name(), target = S::KIND, "mapped via visitor");
        visitor.into_snapshot()
    }
}

/// Maps with the source's explicit field-by-field copy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldCopyMapper;

impl DomainObjectMapper for FieldCopyMapper {
    fn map<D, S>(&self, source: &D) -> DomainResult<S>
    where
        D: Mappable + ?Sized,
        S: Snapshot,
    {
        let snapshot = source.copy_fields()?;

        tracing::trace!(source = source.type_name(), target = S::KIND, "mapped via field copy");
        S::from_any(snapshot)
    }
}

/// Runtime choice between the mapping strategies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MapperStrategy {
    #[default]
    Visitor,
    FieldCopy,
}

impl MapperStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            MapperStrategy::Visitor => "visitor",
            MapperStrategy::FieldCopy => "field-copy",
        }
    }
}

impl core::fmt::Display for MapperStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for MapperStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visitor" => Ok(MapperStrategy::Visitor),
            "field-copy" | "field_copy" | "fieldcopy" => Ok(MapperStrategy::FieldCopy),
            other => Err(DomainError::invalid_argument(format!(
                "unknown mapper strategy '{other}' (expected 'visitor' or 'field-copy')"
            ))),
        }
    }
}

impl DomainObjectMapper for MapperStrategy {
    fn map<D, S>(&self, source: &D) -> DomainResult<S>
    where
        D: Mappable + ?Sized,
        S: Snapshot,
    {
        match self {
            MapperStrategy::Visitor => VisitorMapper.map(source),
            MapperStrategy::FieldCopy => FieldCopyMapper.map(source),
        }
    }
}

impl Mappable for Invoice {
    fn type_name(&self) -> &'static str {
        "Invoice"
    }

    fn as_visitable(&self) -> Option<&dyn Visitable> {
        Some(self)
    }

    fn copy_fields(&self) -> DomainResult<AnySnapshot> {
        let mut dto = InvoiceDto::new(self.id_typed(), self.customer_id());
        for line in self.lines() {
            dto.push_item(line.product_code().as_str(), line.quantity().value())?;
        }
        Ok(AnySnapshot::Invoice(dto))
    }
}

impl Mappable for InvoiceItem {
    fn type_name(&self) -> &'static str {
        "InvoiceItem"
    }

    fn as_visitable(&self) -> Option<&dyn Visitable> {
        Some(self)
    }

    fn copy_fields(&self) -> DomainResult<AnySnapshot> {
        Ok(AnySnapshot::InvoiceItem(InvoiceItemDto {
            invoice_item_id: 1,
            product_code: self.product_code().as_str().to_owned(),
            quantity: self.quantity().value(),
        }))
    }
}

// Value objects have no snapshot of their own.
impl Mappable for ProductCode {
    fn type_name(&self) -> &'static str {
        "ProductCode"
    }
}

impl Mappable for ProductQuantity {
    fn type_name(&self) -> &'static str {
        "ProductQuantity"
    }
}
