//! Estimate domain types
//!
//! - **types**: mutable construction-time state (line items, header)
//! - **document**: the immutable committed estimate record

mod document;
mod types;

pub use document::{EstimateDocument, EstimateStatus};
pub use types::{DiscountMode, EstimateHeader, LineItem, NewLineItem, Totals};
