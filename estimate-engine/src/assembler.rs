//! Document assembler
//!
//! Builds the immutable estimate document from live session state at
//! commit time. The workflow gate should make a bad commit
//! unreachable, but the assembler does not trust the caller's
//! gating: the hard preconditions are re-checked here.

use crate::error::EngineError;
use crate::money::compute_totals;
use crate::providers::NumberGenerator;
use shared::estimate::{EstimateDocument, EstimateHeader, EstimateStatus, LineItem};
use shared::models::Customer;
use shared::util;

/// Assemble the committed record from header, customer snapshot, and
/// ledger items
///
/// Items are copied, never aliased; later engine mutation cannot
/// touch the returned document. The document is not persisted here;
/// that is the caller's collaborator.
pub fn assemble(
    header: &EstimateHeader,
    customer: Option<&Customer>,
    items: &[LineItem],
    numbers: &dyn NumberGenerator,
) -> Result<EstimateDocument, EngineError> {
    let Some(customer) = customer else {
        return Err(EngineError::Precondition(
            "no customer selected".to_string(),
        ));
    };
    if items.is_empty() {
        return Err(EngineError::Precondition(
            "estimate has no line items".to_string(),
        ));
    }
    if header.expiry_date < header.issue_date {
        return Err(EngineError::Precondition(format!(
            "expiry date {} precedes issue date {}",
            header.expiry_date, header.issue_date
        )));
    }

    let totals = compute_totals(items, header);

    Ok(EstimateDocument {
        id: numbers.next_id(),
        number: numbers.next_number(),
        customer_id: customer.id.clone(),
        customer_name: customer.name.clone(),
        customer_phone: customer.phone.clone(),
        customer_email: customer.email.clone(),
        issue_date: header.issue_date,
        expiry_date: header.expiry_date,
        items: items.to_vec(),
        subtotal: totals.subtotal,
        discount_amount: totals.discount_amount,
        tax_amount: totals.tax_amount,
        total: totals.total,
        status: EstimateStatus::Draft,
        notes: header.notes.clone(),
        terms: header.terms.clone(),
        created_at: util::now_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::SnowflakeNumbers;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn customer() -> Customer {
        Customer {
            id: "C1".to_string(),
            name: "Acme Motors".to_string(),
            phone: Some("+34 600 000 000".to_string()),
            email: None,
            address: None,
            is_active: true,
        }
    }

    fn item() -> LineItem {
        LineItem {
            id: "item-1".to_string(),
            product_id: "P1".to_string(),
            name: "Oil Filter".to_string(),
            description: String::new(),
            quantity: 2,
            unit_price: Decimal::from(500),
            line_discount: Decimal::ZERO,
            line_total: Decimal::from(1000),
        }
    }

    #[test]
    fn test_assemble_snapshots_everything() {
        let header = EstimateHeader {
            customer_id: Some("C1".to_string()),
            tax_percentage: Decimal::from(21),
            notes: Some("picked up in store".to_string()),
            ..EstimateHeader::default()
        };

        let customer = customer();
        let items = vec![item()];
        let doc = assemble(&header, Some(&customer), &items, &SnowflakeNumbers).unwrap();

        assert!(doc.is_draft());
        assert_eq!(doc.customer_name, "Acme Motors");
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.subtotal, Decimal::from(1000));
        assert_eq!(doc.tax_amount, Decimal::from(210));
        assert_eq!(doc.total, Decimal::from(1210));
        assert_eq!(doc.notes.as_deref(), Some("picked up in store"));
        assert!(!doc.id.is_empty());
        assert!(doc.number.starts_with("EST-"));
    }

    #[test]
    fn test_assemble_rejects_empty_ledger() {
        let header = EstimateHeader::default();
        let customer = customer();

        let err = assemble(&header, Some(&customer), &[], &SnowflakeNumbers).unwrap_err();
        assert!(matches!(err, EngineError::Precondition(_)));
    }

    #[test]
    fn test_assemble_rejects_missing_customer() {
        let header = EstimateHeader::default();
        let items = vec![item()];

        let err = assemble(&header, None, &items, &SnowflakeNumbers).unwrap_err();
        assert!(matches!(err, EngineError::Precondition(_)));
    }

    #[test]
    fn test_assemble_rejects_inverted_dates() {
        let header = EstimateHeader {
            issue_date: NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            ..EstimateHeader::default()
        };

        let customer = customer();
        let items = vec![item()];
        let err = assemble(&header, Some(&customer), &items, &SnowflakeNumbers).unwrap_err();
        assert!(matches!(err, EngineError::Precondition(_)));
    }

    #[test]
    fn test_document_does_not_alias_input_items() {
        let header = EstimateHeader::default();
        let customer = customer();
        let mut items = vec![item()];

        let doc = assemble(&header, Some(&customer), &items, &SnowflakeNumbers).unwrap();
        items[0].quantity = 99;

        assert_eq!(doc.items[0].quantity, 2);
    }
}
