//! Catalog and customer models
//!
//! Read-only inputs to the estimate engine. The engine resolves
//! products and customers through provider traits; these are the
//! entities those providers return.

mod customer;
mod product;

pub use customer::Customer;
pub use product::CatalogProduct;
