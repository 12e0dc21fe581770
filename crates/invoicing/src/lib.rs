//! Invoicing domain module.
//!
//! The `Invoice` aggregate and its value objects, plus the mapping from the
//! aggregate to flat, storage-shaped snapshots. Pure domain logic: no IO, no
//! storage, no serialization format decisions.

pub mod invoice;
pub mod mapper;
pub mod product_code;
pub mod product_quantity;
pub mod snapshot;
pub mod visitor;

pub use invoice::{Invoice, InvoiceItem};
pub use mapper::{DomainObjectMapper, FieldCopyMapper, Mappable, MapperStrategy, VisitorMapper};
pub use product_code::ProductCode;
pub use product_quantity::ProductQuantity;
pub use snapshot::{AnySnapshot, InvoiceDto, InvoiceItemDto, Snapshot};
pub use visitor::{InvoiceSnapshotVisitor, Node, Visitable, Visitor};
