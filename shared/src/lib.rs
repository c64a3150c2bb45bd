//! Shared domain types for the estimate workspace
//!
//! Common types used across crates: catalog and customer models,
//! estimate line-item/header/document types, and time/ID utilities.

pub mod estimate;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
