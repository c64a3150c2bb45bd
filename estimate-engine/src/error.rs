//! Engine error taxonomy
//!
//! Engine errors are local and synchronous; nothing is retried.
//! Two other rejection shapes deliberately do not appear here:
//! silent no-ops on the ledger/header mutators (transient form
//! input) and boolean guard failures on wizard transitions.

use thiserror::Error;

/// Errors surfaced by engine operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Input rejected before any state change (`add_item`)
    #[error("validation failed: {0}")]
    Validation(String),

    /// Contract misuse caught by a defensive re-check (`commit`)
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Catalog could not resolve the product reference
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Customer provider could not resolve the reference
    #[error("customer not found: {0}")]
    CustomerNotFound(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
