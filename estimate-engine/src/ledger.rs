//! Line-item ledger
//!
//! Ordered collection of line items for one estimate under
//! construction. Insertion order is preserved across mutations;
//! removing an item does not reorder the survivors.
//!
//! The update mutators absorb transient invalid input instead of
//! raising: the ledger is driven directly by live form fields, and
//! an empty or half-typed quantity must not crash or roll back other
//! state. Those branches are explicit no-ops guarded by the named
//! predicates below, not swallowed errors. `add_item` is different:
//! it is a deliberate action, so a non-positive quantity there is a
//! `Validation` error.

use crate::error::EngineError;
use crate::money;
use crate::providers::CatalogProvider;
use rust_decimal::Decimal;
use shared::estimate::{LineItem, NewLineItem};
use tracing::debug;
use uuid::Uuid;

/// Quantity accepted for storage; live forms emit 0 or negatives mid-edit
#[inline]
fn is_valid_quantity(quantity: i32) -> bool {
    quantity >= 1
}

#[inline]
fn is_valid_unit_price(price: Decimal) -> bool {
    price >= Decimal::ZERO
}

/// Ordered line-item ledger for one open estimate
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    items: Vec<LineItem>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view, insertion order preserved
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Resolve the product and append a new line item
    ///
    /// The unit price resolves to the override when present and
    /// non-negative, else to the catalog price. Fails without
    /// mutating the ledger on non-positive quantity or an
    /// unresolvable product reference.
    pub fn add_item(
        &mut self,
        catalog: &dyn CatalogProvider,
        input: &NewLineItem,
    ) -> Result<&LineItem, EngineError> {
        if !is_valid_quantity(input.quantity) {
            return Err(EngineError::Validation(format!(
                "quantity must be positive, got {}",
                input.quantity
            )));
        }

        let product = catalog.resolve(&input.product_id)?;
        let unit_price = input
            .unit_price
            .filter(|price| is_valid_unit_price(*price))
            .unwrap_or(product.price);

        let item = LineItem {
            id: Uuid::new_v4().to_string(),
            product_id: product.id,
            name: product.name,
            description: input.description.clone().unwrap_or_default(),
            quantity: input.quantity,
            unit_price,
            line_discount: Decimal::ZERO,
            line_total: money::line_total(unit_price, input.quantity),
        };

        debug!(
            item_id = %item.id,
            product_id = %item.product_id,
            quantity = item.quantity,
            unit_price = %item.unit_price,
            "line item added"
        );

        let idx = self.items.len();
        self.items.push(item);
        Ok(&self.items[idx])
    }

    /// Update an item's quantity and recompute its line total
    ///
    /// Silent no-op when the quantity is invalid or the id is
    /// unknown; repeating the same update leaves the ledger
    /// byte-for-byte identical.
    pub fn update_quantity(&mut self, id: &str, quantity: i32) {
        if !is_valid_quantity(quantity) {
            debug!(item_id = %id, quantity, "ignoring invalid quantity update");
            return;
        }
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        item.quantity = quantity;
        item.line_total = money::line_total(item.unit_price, item.quantity);
    }

    /// Update an item's unit price and recompute its line total
    ///
    /// Same silent-reject policy as [`Ledger::update_quantity`].
    pub fn update_unit_price(&mut self, id: &str, unit_price: Decimal) {
        if !is_valid_unit_price(unit_price) {
            debug!(item_id = %id, unit_price = %unit_price, "ignoring invalid price update");
            return;
        }
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        item.unit_price = unit_price;
        item.line_total = money::line_total(item.unit_price, item.quantity);
    }

    /// Remove an item by id; no-op when absent
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
