//! External collaborator traits
//!
//! Catalog lookup, customer lookup, and document numbering are
//! external concerns. Their providers must resolve (or fail) before
//! the initiating engine operation completes, so the trait surface
//! is synchronous; an async calling layer awaits first and invokes
//! the engine after.
//!
//! In-memory implementations are provided for embedding and tests.

use crate::error::EngineError;
use shared::models::{CatalogProduct, Customer};
use shared::util;
use std::collections::HashMap;

/// Resolves product references against the read-only catalog
pub trait CatalogProvider: Send + Sync {
    /// Resolve a product reference to its catalog entry
    fn resolve(&self, product_id: &str) -> Result<CatalogProduct, EngineError>;
}

/// Resolves customer references to display fields
pub trait CustomerProvider: Send + Sync {
    fn resolve(&self, customer_id: &str) -> Result<Customer, EngineError>;
}

/// Supplies the id/number pair for an assembled document
///
/// Both values are opaque to the engine; numbering policy (sequence,
/// time-based, per-tenant prefixes) lives with the implementor.
pub trait NumberGenerator: Send + Sync {
    fn next_id(&self) -> String;
    fn next_number(&self) -> String;
}

// ============================================================================
// In-memory implementations
// ============================================================================

/// In-memory catalog backed by a HashMap
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<String, CatalogProduct>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: CatalogProduct) {
        self.products.insert(product.id.clone(), product);
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn resolve(&self, product_id: &str) -> Result<CatalogProduct, EngineError> {
        self.products
            .get(product_id)
            .filter(|product| product.is_active)
            .cloned()
            .ok_or_else(|| EngineError::ProductNotFound(product_id.to_string()))
    }
}

/// In-memory customer directory backed by a HashMap
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomers {
    customers: HashMap<String, Customer>,
}

impl InMemoryCustomers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, customer: Customer) {
        self.customers.insert(customer.id.clone(), customer);
    }
}

impl CustomerProvider for InMemoryCustomers {
    fn resolve(&self, customer_id: &str) -> Result<Customer, EngineError> {
        self.customers
            .get(customer_id)
            .filter(|customer| customer.is_active)
            .cloned()
            .ok_or_else(|| EngineError::CustomerNotFound(customer_id.to_string()))
    }
}

/// Document number prefix used by [`SnowflakeNumbers`]
const NUMBER_PREFIX: &str = "EST";

/// Snowflake-backed generator: raw ids, prefixed numbers
#[derive(Debug, Clone, Copy, Default)]
pub struct SnowflakeNumbers;

impl NumberGenerator for SnowflakeNumbers {
    fn next_id(&self) -> String {
        util::snowflake_id().to_string()
    }

    fn next_number(&self) -> String {
        format!("{}-{}", NUMBER_PREFIX, util::snowflake_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, active: bool) -> CatalogProduct {
        CatalogProduct {
            id: id.to_string(),
            name: format!("Product {id}"),
            price: Decimal::from(10),
            available_stock: 5,
            is_active: active,
        }
    }

    #[test]
    fn test_catalog_resolves_active_products() {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert(product("P1", true));

        let resolved = catalog.resolve("P1").unwrap();
        assert_eq!(resolved.name, "Product P1");
    }

    #[test]
    fn test_catalog_rejects_unknown_and_inactive() {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert(product("P1", false));

        assert_eq!(
            catalog.resolve("P1"),
            Err(EngineError::ProductNotFound("P1".to_string()))
        );
        assert_eq!(
            catalog.resolve("P2"),
            Err(EngineError::ProductNotFound("P2".to_string()))
        );
    }

    #[test]
    fn test_snowflake_numbers_are_prefixed() {
        let numbers = SnowflakeNumbers;

        assert!(!numbers.next_id().is_empty());
        assert!(numbers.next_number().starts_with("EST-"));
    }
}
