//! Double-dispatch traversal over the invoice aggregate.
//!
//! A [`Visitable`] object drives the traversal and hands each part of itself to
//! the [`Visitor`] as a [`Node`]. Node kinds are a closed enum, so a visitor
//! decides per-kind behaviour with a `match` instead of inspecting types at
//! runtime.

use playground_core::{DomainError, DomainResult};

use crate::invoice::{Invoice, InvoiceItem};
use crate::snapshot::{AnySnapshot, InvoiceDto, InvoiceItemDto, Snapshot};

/// One part of the aggregate handed to a visitor.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Invoice(&'a Invoice),
    InvoiceItem(&'a InvoiceItem),
}

pub trait Visitor {
    /// Called when the traversal reaches `node`, before any of its children.
    fn visit(&mut self, node: Node<'_>);

    /// Called after all children of `node` were visited.
    fn depart(&mut self, _node: Node<'_>) {}
}

pub trait Visitable {
    fn accept(&self, visitor: &mut dyn Visitor);
}

/// Visitor that builds a snapshot of whatever it traverses.
///
/// Visiting an invoice starts a fresh [`InvoiceDto`]; each line visited while
/// that invoice is being traversed is appended to it. A line visited on its own
/// becomes an [`InvoiceItemDto`] snapshot. A completed invoice snapshot is only
/// replaced by visiting another invoice; stray lines after it are ignored.
#[derive(Debug, Default)]
pub struct InvoiceSnapshotVisitor {
    current: Option<AnySnapshot>,
    completed: bool,
    failure: Option<DomainError>,
}

impl InvoiceSnapshotVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the root that started the current snapshot has been departed.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Take the accumulated snapshot as `S`.
    pub fn into_snapshot<S: Snapshot>(self) -> DomainResult<S> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        let snapshot = self.current.ok_or_else(|| {
            DomainError::unsupported("traversal did not produce a snapshot")
        })?;
        S::from_any(snapshot)
    }

    fn item_dto(item: &InvoiceItem, invoice_item_id: u32) -> InvoiceItemDto {
        InvoiceItemDto {
            invoice_item_id,
            product_code: item.product_code().as_str().to_owned(),
            quantity: item.quantity().value(),
        }
    }
}

impl Visitor for InvoiceSnapshotVisitor {
    fn visit(&mut self, node: Node<'_>) {
        match node {
            Node::Invoice(invoice) => {
                self.current = Some(AnySnapshot::Invoice(InvoiceDto::new(
                    invoice.id_typed(),
                    invoice.customer_id(),
                )));
                self.completed = false;
                self.failure = None;
            }
            Node::InvoiceItem(item) => {
                if let Some(AnySnapshot::Invoice(dto)) = self.current.as_mut() {
                    if self.completed {
                        tracing::debug!(
                            product_code = %item.product_code(),
                            "line visited after invoice snapshot completed; ignored"
                        );
                    } else if let Err(err) =
                        dto.push_item(item.product_code().as_str(), item.quantity().value())
                    {
                        if self.failure.is_none() {
                            self.failure = Some(err);
                        }
                    }
                    return;
                }
                self.current = Some(AnySnapshot::InvoiceItem(Self::item_dto(item, 1)));
                self.completed = true;
            }
        }
    }

    fn depart(&mut self, node: Node<'_>) {
        if let Node::Invoice(_) = node {
            self.completed = true;
        }
    }
}
