//! Estimate session: one estimate under construction
//!
//! Owns the mutable header, ledger, and wizard step for a single
//! open estimate. State is exclusively owned by the session; every
//! public operation is one atomic synchronous step with no
//! externally observable intermediate state. Collaborators (catalog,
//! customer directory, numbering) are resolved before any state is
//! touched, so a provider failure never leaves a half-applied
//! mutation behind.
//!
//! Header mutators follow the same silent-reject discipline as the
//! ledger: they are fed by live form fields, and transiently invalid
//! values are absorbed as explicit no-ops.

use crate::assembler;
use crate::error::EngineError;
use crate::ledger::Ledger;
use crate::money::compute_totals;
use crate::providers::{CatalogProvider, CustomerProvider, NumberGenerator};
use crate::workflow::{EstimateStep, GuardState};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::estimate::{DiscountMode, EstimateDocument, EstimateHeader, LineItem, NewLineItem, Totals};
use shared::models::Customer;
use std::sync::Arc;
use tracing::{debug, warn};

/// One open estimate-under-construction
pub struct EstimateSession {
    header: EstimateHeader,
    ledger: Ledger,
    step: EstimateStep,
    /// Display snapshot of the selected customer
    customer: Option<Customer>,
    catalog: Arc<dyn CatalogProvider>,
    customers: Arc<dyn CustomerProvider>,
    numbers: Arc<dyn NumberGenerator>,
}

impl EstimateSession {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        customers: Arc<dyn CustomerProvider>,
        numbers: Arc<dyn NumberGenerator>,
    ) -> Self {
        Self {
            header: EstimateHeader::default(),
            ledger: Ledger::new(),
            step: EstimateStep::default(),
            customer: None,
            catalog,
            customers,
            numbers,
        }
    }

    // ==================== Read surface ====================

    pub fn step(&self) -> EstimateStep {
        self.step
    }

    pub fn header(&self) -> &EstimateHeader {
        &self.header
    }

    pub fn items(&self) -> &[LineItem] {
        self.ledger.items()
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Derived totals, recomputed from the ledger on every call
    pub fn totals(&self) -> Totals {
        compute_totals(self.ledger.items(), &self.header)
    }

    // ==================== Customer selection ====================

    /// Resolve and select the counter-party for this estimate
    pub fn select_customer(&mut self, customer_id: &str) -> Result<(), EngineError> {
        let customer = self.customers.resolve(customer_id)?;
        debug!(customer_id = %customer.id, name = %customer.name, "customer selected");
        self.header.customer_id = Some(customer.id.clone());
        self.customer = Some(customer);
        Ok(())
    }

    pub fn clear_customer(&mut self) {
        self.header.customer_id = None;
        self.customer = None;
    }

    // ==================== Ledger operations ====================

    /// Add a line item; see [`Ledger::add_item`] for the contract
    pub fn add_item(&mut self, input: &NewLineItem) -> Result<LineItem, EngineError> {
        self.ledger
            .add_item(&*self.catalog, input)
            .map(|item| item.clone())
    }

    pub fn update_quantity(&mut self, id: &str, quantity: i32) {
        self.ledger.update_quantity(id, quantity);
    }

    pub fn update_unit_price(&mut self, id: &str, unit_price: Decimal) {
        self.ledger.update_unit_price(id, unit_price);
    }

    pub fn remove_item(&mut self, id: &str) {
        self.ledger.remove_item(id);
    }

    // ==================== Header operations ====================

    /// Set issue and expiry dates; silent no-op when the expiry
    /// precedes the issue date
    pub fn set_dates(&mut self, issue_date: NaiveDate, expiry_date: NaiveDate) {
        if expiry_date < issue_date {
            warn!(%issue_date, %expiry_date, "ignoring inverted date range");
            return;
        }
        self.header.issue_date = issue_date;
        self.header.expiry_date = expiry_date;
    }

    /// Set the header discount; silent no-op on a negative value
    pub fn set_discount(&mut self, value: Decimal, mode: DiscountMode) {
        if value < Decimal::ZERO {
            warn!(value = %value, "ignoring negative discount value");
            return;
        }
        self.header.discount_value = value;
        self.header.discount_mode = mode;
    }

    /// Set the tax percentage (no upper bound); silent no-op when negative
    pub fn set_tax_percentage(&mut self, value: Decimal) {
        if value < Decimal::ZERO {
            warn!(value = %value, "ignoring negative tax percentage");
            return;
        }
        self.header.tax_percentage = value;
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.header.notes = notes;
    }

    pub fn set_terms(&mut self, terms: Option<String>) {
        self.header.terms = terms;
    }

    // ==================== Workflow ====================

    fn guard_state(&self) -> GuardState {
        GuardState {
            customer_selected: self.customer.is_some(),
            has_items: !self.ledger.is_empty(),
        }
    }

    /// Whether the forward guard from the current step passes
    pub fn can_advance(&self) -> bool {
        self.step.can_advance(self.guard_state())
    }

    /// Guarded forward transition; returns `false` with no state
    /// change when the guard rejects
    pub fn advance(&mut self) -> bool {
        match self.step.advance(self.guard_state()) {
            Some(next) => {
                debug!(from = ?self.step, to = ?next, "wizard advanced");
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Backward transition; always permitted except from the first
    /// step, where leaving the wizard is [`EstimateSession::cancel`]
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Discard the session: empty ledger, default header, no
    /// customer, back to the first step
    pub fn cancel(&mut self) {
        debug!(items = self.ledger.len(), step = ?self.step, "session cancelled");
        self.reset();
    }

    // ==================== Commit ====================

    /// Assemble the immutable document and reset the session
    ///
    /// Callable only from `Finalize`. The empty-ledger and
    /// missing-customer preconditions are re-checked by the
    /// assembler even though the workflow gate should have made them
    /// unreachable. On success the session is reset and ready for
    /// the next estimate; on failure nothing changes.
    pub fn commit(&mut self) -> Result<EstimateDocument, EngineError> {
        if self.step != EstimateStep::Finalize {
            return Err(EngineError::Precondition(format!(
                "commit requires the finalize step, current step is {:?}",
                self.step
            )));
        }

        let document = assembler::assemble(
            &self.header,
            self.customer.as_ref(),
            self.ledger.items(),
            &*self.numbers,
        )?;

        debug!(
            document_id = %document.id,
            number = %document.number,
            items = document.items.len(),
            total = %document.total,
            "estimate committed"
        );

        self.reset();
        Ok(document)
    }

    fn reset(&mut self) {
        self.header = EstimateHeader::default();
        self.ledger.clear();
        self.customer = None;
        self.step = EstimateStep::SelectCustomer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{InMemoryCatalog, InMemoryCustomers, SnowflakeNumbers};
    use shared::models::CatalogProduct;

    fn session() -> EstimateSession {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert(CatalogProduct {
            id: "P1".to_string(),
            name: "Oil Filter".to_string(),
            price: Decimal::from(500),
            available_stock: 10,
            is_active: true,
        });

        let mut customers = InMemoryCustomers::new();
        customers.insert(Customer {
            id: "C1".to_string(),
            name: "Acme Motors".to_string(),
            phone: None,
            email: Some("billing@acme.example".to_string()),
            address: None,
            is_active: true,
        });

        EstimateSession::new(
            Arc::new(catalog),
            Arc::new(customers),
            Arc::new(SnowflakeNumbers),
        )
    }

    #[test]
    fn test_select_customer_unknown_id_errors_without_selection() {
        let mut session = session();

        let err = session.select_customer("C9").unwrap_err();
        assert_eq!(err, EngineError::CustomerNotFound("C9".to_string()));
        assert!(session.customer().is_none());
        assert!(!session.can_advance());
    }

    #[test]
    fn test_totals_follow_ledger_on_every_read() {
        let mut session = session();
        session.select_customer("C1").unwrap();
        let id = session.add_item(&NewLineItem::new("P1", 2)).unwrap().id;

        assert_eq!(session.totals().subtotal, Decimal::from(1000));

        session.update_quantity(&id, 3);
        assert_eq!(session.totals().subtotal, Decimal::from(1500));

        session.remove_item(&id);
        assert_eq!(session.totals().subtotal, Decimal::ZERO);
    }

    #[test]
    fn test_header_mutators_absorb_invalid_input() {
        let mut session = session();
        let before = session.header().clone();

        session.set_discount(Decimal::from(-10), DiscountMode::Fixed);
        session.set_tax_percentage(Decimal::from(-1));
        session.set_dates(
            NaiveDate::from_ymd_opt(2026, 6, 10).unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        );

        assert_eq!(session.header(), &before);
    }

    #[test]
    fn test_commit_outside_finalize_is_a_precondition_error() {
        let mut session = session();
        session.select_customer("C1").unwrap();
        session.add_item(&NewLineItem::new("P1", 1)).unwrap();

        let err = session.commit().unwrap_err();
        assert!(matches!(err, EngineError::Precondition(_)));

        // Nothing was reset by the failed commit
        assert_eq!(session.items().len(), 1);
        assert!(session.customer().is_some());
    }

    #[test]
    fn test_cancel_resets_everything() {
        let mut session = session();
        session.select_customer("C1").unwrap();
        session.add_item(&NewLineItem::new("P1", 2)).unwrap();
        session.set_tax_percentage(Decimal::from(21));
        assert!(session.advance());

        session.cancel();

        assert_eq!(session.step(), EstimateStep::SelectCustomer);
        assert!(session.items().is_empty());
        assert!(session.customer().is_none());
        assert_eq!(session.header().tax_percentage, Decimal::ZERO);
    }
}
