//! Construction-time estimate types
//!
//! These types are mutable while an estimate session is open. The
//! committed record lives in [`super::document`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Validity window applied to a fresh header (expiry = issue + 30 days)
pub const DEFAULT_VALIDITY_DAYS: i64 = 30;

// ============================================================================
// Line Items
// ============================================================================

/// One purchasable unit on the estimate
///
/// `line_total` is a cached derived value (`quantity × unit_price`);
/// the ledger recomputes it on every mutation of its inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Stable unique id, assigned at insertion
    pub id: String,
    /// Catalog product reference
    pub product_id: String,
    /// Display name, defaults to the catalog name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Quantity, always >= 1 once stored
    pub quantity: i32,
    /// Unit price; may differ from the catalog price when overridden
    pub unit_price: Decimal,
    /// Per-line discount, reserved for future use (always 0)
    #[serde(default)]
    pub line_discount: Decimal,
    /// Derived: quantity × unit_price
    pub line_total: Decimal,
}

/// Input for adding a line item (before catalog resolution)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLineItem {
    /// Catalog product reference
    pub product_id: String,
    pub quantity: i32,
    /// Manual unit price override; catalog price is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    /// Description override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewLineItem {
    pub fn new(product_id: impl Into<String>, quantity: i32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            unit_price: None,
            description: None,
        }
    }

    pub fn with_unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ============================================================================
// Header
// ============================================================================

/// How the header-level discount value is interpreted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountMode {
    /// Discount value is a percentage of the subtotal
    #[default]
    Percentage,
    /// Discount value is a fixed amount
    Fixed,
}

/// Estimate-level fields not tied to any single line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimateHeader {
    /// Selected customer reference; `None` until a customer is chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub issue_date: NaiveDate,
    /// Must not precede `issue_date`; checked at assembly
    pub expiry_date: NaiveDate,
    /// Header-level discount value, non-negative
    pub discount_value: Decimal,
    pub discount_mode: DiscountMode,
    /// Tax percentage, non-negative, no upper bound
    pub tax_percentage: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
}

impl EstimateHeader {
    /// Fresh header dated `issue_date` with the default validity window
    pub fn new(issue_date: NaiveDate) -> Self {
        Self {
            customer_id: None,
            issue_date,
            expiry_date: issue_date + chrono::Duration::days(DEFAULT_VALIDITY_DAYS),
            discount_value: Decimal::ZERO,
            discount_mode: DiscountMode::default(),
            tax_percentage: Decimal::ZERO,
            notes: None,
            terms: None,
        }
    }
}

impl Default for EstimateHeader {
    fn default() -> Self {
        Self::new(chrono::Utc::now().date_naive())
    }
}

// ============================================================================
// Totals
// ============================================================================

/// Derived financial summary for one estimate
///
/// Always recomputed from the ledger and header; never cached
/// independently of its inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    /// Sum of line totals
    pub subtotal: Decimal,
    /// Header-level discount amount
    pub discount_amount: Decimal,
    /// Tax on the discounted base
    pub tax_amount: Decimal,
    /// subtotal - discount_amount + tax_amount
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_default_validity_window() {
        let issue = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let header = EstimateHeader::new(issue);

        assert_eq!(header.issue_date, issue);
        assert_eq!(
            header.expiry_date,
            NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()
        );
        assert_eq!(header.discount_value, Decimal::ZERO);
        assert_eq!(header.discount_mode, DiscountMode::Percentage);
        assert_eq!(header.tax_percentage, Decimal::ZERO);
        assert!(header.customer_id.is_none());
    }

    #[test]
    fn test_discount_mode_serde_tags() {
        let json = serde_json::to_string(&DiscountMode::Percentage).unwrap();
        assert_eq!(json, "\"PERCENTAGE\"");

        let mode: DiscountMode = serde_json::from_str("\"FIXED\"").unwrap();
        assert_eq!(mode, DiscountMode::Fixed);
    }

    #[test]
    fn test_new_line_item_builder() {
        let input = NewLineItem::new("P1", 3)
            .with_unit_price(Decimal::new(1250, 2))
            .with_description("custom wording");

        assert_eq!(input.product_id, "P1");
        assert_eq!(input.quantity, 3);
        assert_eq!(input.unit_price, Some(Decimal::new(1250, 2)));
        assert_eq!(input.description.as_deref(), Some("custom wording"));
    }
}
