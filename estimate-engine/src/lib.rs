//! Estimate construction engine
//!
//! Drives the guided construction of estimate (quotation) documents:
//!
//! - **ledger**: ordered line-item ledger with per-item recomputation
//! - **money**: decimal aggregation of subtotal/discount/tax/total
//! - **workflow**: three-step wizard state machine with guarded transitions
//! - **assembler**: immutable document assembly at commit time
//! - **session**: one estimate-under-construction tying the above together
//! - **providers**: catalog/customer/numbering collaborator traits
//!
//! # Data Flow
//!
//! ```text
//! user action → EstimateSession → Ledger mutation
//!                     ↓
//!              totals() -- recomputed from the ledger on every read
//!                     ↓
//!              advance()/back() -- step gated on selection/ledger state
//!                     ↓
//!              commit() → assembler → EstimateDocument (immutable)
//!                     ↓
//!              session reset to the first step, empty ledger
//! ```
//!
//! Persistence, rendering, and transport are external; the engine's
//! responsibility ends at producing the committed record.

pub mod assembler;
pub mod error;
pub mod ledger;
pub mod money;
pub mod providers;
pub mod session;
pub mod workflow;

// Re-exports
pub use error::{EngineError, EngineResult};
pub use ledger::Ledger;
pub use money::{compute_totals, compute_totals_clamped};
pub use providers::{
    CatalogProvider, CustomerProvider, InMemoryCatalog, InMemoryCustomers, NumberGenerator,
    SnowflakeNumbers,
};
pub use session::EstimateSession;
pub use workflow::{EstimateStep, GuardState};

// Re-export shared types for convenience
pub use shared::estimate::{
    DiscountMode, EstimateDocument, EstimateHeader, EstimateStatus, LineItem, NewLineItem, Totals,
};
pub use shared::models::{CatalogProduct, Customer};
