//! Committed estimate record
//!
//! Produced once by the document assembler at commit time. The
//! engine never mutates a document after assembly; the subsequent
//! lifecycle (sent, accepted, expired) belongs to whatever stores it.

use super::types::LineItem;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Estimate lifecycle status
///
/// The engine only ever produces `Draft`; the remaining variants
/// exist for the external lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimateStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
    Declined,
    Expired,
}

/// Immutable estimate document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimateDocument {
    /// Opaque id supplied by the number generator
    pub id: String,
    /// Human-readable number, also generator-supplied
    pub number: String,
    /// Customer reference plus display snapshot copied at commit
    pub customer_id: String,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    /// Full ledger snapshot, copied (not aliased) at commit
    pub items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    /// Always `Draft` at assembly
    pub status: EstimateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    /// Assembly timestamp, UTC milliseconds
    pub created_at: i64,
}

impl EstimateDocument {
    pub fn is_draft(&self) -> bool {
        self.status == EstimateStatus::Draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_tags() {
        let json = serde_json::to_string(&EstimateStatus::Draft).unwrap();
        assert_eq!(json, "\"DRAFT\"");

        let status: EstimateStatus = serde_json::from_str("\"ACCEPTED\"").unwrap();
        assert_eq!(status, EstimateStatus::Accepted);
    }
}
