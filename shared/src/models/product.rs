//! Catalog product model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product entity
///
/// Read-only from the engine's perspective; the catalog provider
/// owns its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    /// Unit price in major currency units
    pub price: Decimal,
    /// Stock on hand; informational only, the engine does not enforce it
    pub available_stock: i64,
    pub is_active: bool,
}
