//! Money calculation using rust_decimal for precision
//!
//! All monetary arithmetic is done in `Decimal` and rounded to two
//! decimal places. The aggregation functions are pure and recompute
//! every derived figure from scratch on each call, so the totals can
//! never desynchronize from the ledger they were derived from.

use rust_decimal::prelude::*;
use shared::estimate::{DiscountMode, EstimateHeader, LineItem, Totals};

/// Rounding precision for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value to storage precision
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line total: unit_price × quantity
pub fn line_total(unit_price: Decimal, quantity: i32) -> Decimal {
    round_money(unit_price * Decimal::from(quantity))
}

/// Subtotal: Σ line_total over the ledger
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().map(|item| item.line_total).sum()
}

/// Header-level discount amount on a given subtotal
pub fn discount_amount(subtotal: Decimal, value: Decimal, mode: DiscountMode) -> Decimal {
    match mode {
        DiscountMode::Percentage => round_money(subtotal * value / Decimal::ONE_HUNDRED),
        DiscountMode::Fixed => round_money(value),
    }
}

/// Recompute all derived totals from the ledger and header
///
/// ```text
/// subtotal        = Σ line_total
/// discount_amount = percentage ? subtotal × value / 100 : value
/// after_discount  = subtotal - discount_amount
/// tax_amount      = after_discount × tax_percentage / 100
/// total           = after_discount + tax_amount
/// ```
///
/// A fixed discount larger than the subtotal drives `after_discount`
/// negative, and with it the tax and total. This variant keeps the
/// raw arithmetic; see [`compute_totals_clamped`] for the floored
/// alternative.
pub fn compute_totals(items: &[LineItem], header: &EstimateHeader) -> Totals {
    let subtotal = subtotal(items);
    let discount = discount_amount(subtotal, header.discount_value, header.discount_mode);
    totals_from(subtotal, discount, header.tax_percentage)
}

/// Same as [`compute_totals`], but the discount is capped at the
/// subtotal so the discounted base never goes below zero
pub fn compute_totals_clamped(items: &[LineItem], header: &EstimateHeader) -> Totals {
    let subtotal = subtotal(items);
    let discount = discount_amount(subtotal, header.discount_value, header.discount_mode)
        .min(subtotal)
        .max(Decimal::ZERO);
    totals_from(subtotal, discount, header.tax_percentage)
}

fn totals_from(subtotal: Decimal, discount: Decimal, tax_percentage: Decimal) -> Totals {
    let after_discount = subtotal - discount;
    let tax = round_money(after_discount * tax_percentage / Decimal::ONE_HUNDRED);
    Totals {
        subtotal,
        discount_amount: discount,
        tax_amount: tax,
        total: round_money(after_discount + tax),
    }
}
