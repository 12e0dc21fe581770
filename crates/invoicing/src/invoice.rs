use std::collections::HashMap;

use playground_core::{AggregateRoot, CustomerId, DomainError, DomainResult, Entity, InvoiceId};

use crate::product_code::ProductCode;
use crate::product_quantity::ProductQuantity;
use crate::visitor::{Node, Visitable, Visitor};

/// Invoice line: one product code with its quantity.
///
/// Immutable. Only the owning [`Invoice`] creates lines; changing a quantity
/// replaces the line with a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceItem {
    product_code: ProductCode,
    quantity: ProductQuantity,
}

impl InvoiceItem {
    pub(crate) fn new(product_code: ProductCode, quantity: ProductQuantity) -> Self {
        Self {
            product_code,
            quantity,
        }
    }

    pub fn product_code(&self) -> &ProductCode {
        &self.product_code
    }

    pub fn quantity(&self) -> ProductQuantity {
        self.quantity
    }
}

impl Entity for InvoiceItem {
    type Id = ProductCode;

    fn id(&self) -> &Self::Id {
        &self.product_code
    }
}

impl Visitable for InvoiceItem {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit(Node::InvoiceItem(self));
    }
}

/// Aggregate root: Invoice.
///
/// Invariant: at most one line per product code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    id: InvoiceId,
    customer_id: CustomerId,
    items: HashMap<ProductCode, InvoiceItem>,
}

impl Invoice {
    /// Create an invoice with no lines.
    ///
    /// Both identifiers must be non-nil.
    pub fn new(id: InvoiceId, customer_id: CustomerId) -> DomainResult<Self> {
        if id.is_nil() {
            return Err(DomainError::invalid_argument("invoice id must not be nil"));
        }
        if customer_id.is_nil() {
            return Err(DomainError::invalid_argument("customer id must not be nil"));
        }

        Ok(Self {
            id,
            customer_id,
            items: HashMap::new(),
        })
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Add a line for a product that is not on the invoice yet.
    ///
    /// Duplicates are rejected, never merged; use
    /// [`increase_quantity`](Self::increase_quantity) to add to an existing line.
    pub fn add_line(&mut self, code: ProductCode, quantity: ProductQuantity) -> DomainResult<()> {
        if self.items.contains_key(&code) {
            return Err(DomainError::invariant(format!(
                "invoice line already exists for product code {code}"
            )));
        }

        tracing::debug!(
            invoice_id = %self.id,
            product_code = %code,
            quantity = quantity.value(),
            "invoice line added"
        );
        self.items
            .insert(code.clone(), InvoiceItem::new(code, quantity));
        Ok(())
    }

    /// Add `by` to the quantity of an existing line.
    ///
    /// The line is replaced only if the new total is a valid quantity.
    pub fn increase_quantity(
        &mut self,
        code: &ProductCode,
        by: ProductQuantity,
    ) -> DomainResult<ProductQuantity> {
        let current = self.quantity(code)?;
        let total = current.checked_add(by)?;

        tracing::debug!(
            invoice_id = %self.id,
            product_code = %code,
            from = current.value(),
            to = total.value(),
            "invoice line quantity increased"
        );
        self.items
            .insert(code.clone(), InvoiceItem::new(code.clone(), total));
        Ok(total)
    }

    pub fn line(&self, code: &ProductCode) -> DomainResult<&InvoiceItem> {
        self.items
            .get(code)
            .ok_or_else(|| DomainError::not_found(format!("no invoice line for product code {code}")))
    }

    pub fn quantity(&self, code: &ProductCode) -> DomainResult<ProductQuantity> {
        self.line(code).map(InvoiceItem::quantity)
    }

    pub fn contains_line(&self, code: &ProductCode) -> bool {
        self.items.contains_key(code)
    }

    /// Lines in unspecified order.
    pub fn lines(&self) -> impl Iterator<Item = &InvoiceItem> {
        self.items.values()
    }

    pub fn line_count(&self) -> usize {
        self.items.len()
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn aggregate_type() -> &'static str {
        "invoicing.invoice"
    }
}

impl Visitable for Invoice {
    /// Root first, then every line once, then the root is departed.
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit(Node::Invoice(self));
        for item in self.items.values() {
            item.accept(visitor);
        }
        visitor.depart(Node::Invoice(self));
    }
}
