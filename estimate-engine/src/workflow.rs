//! Wizard workflow state machine
//!
//! Linear three-step wizard: customer selection → item entry →
//! finalize. Forward transitions are guarded on session state;
//! backward transitions are always permitted. A guard failure is a
//! UI-affordance rejection (no transition, no error), not a
//! data-integrity problem; the assembler re-checks the hard
//! preconditions at commit regardless.

use serde::{Deserialize, Serialize};

/// Wizard step for one estimate under construction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimateStep {
    #[default]
    SelectCustomer,
    BuildItems,
    Finalize,
}

/// Session state the forward guards depend on
#[derive(Debug, Clone, Copy)]
pub struct GuardState {
    pub customer_selected: bool,
    pub has_items: bool,
}

impl EstimateStep {
    /// Next step in the wizard, if any
    pub fn next(self) -> Option<Self> {
        match self {
            Self::SelectCustomer => Some(Self::BuildItems),
            Self::BuildItems => Some(Self::Finalize),
            Self::Finalize => None,
        }
    }

    /// Previous step; `None` from the first step, where leaving the
    /// wizard is a session cancel rather than a transition
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::SelectCustomer => None,
            Self::BuildItems => Some(Self::SelectCustomer),
            Self::Finalize => Some(Self::BuildItems),
        }
    }

    /// Whether the forward guard from this step passes
    pub fn can_advance(self, guard: GuardState) -> bool {
        match self {
            Self::SelectCustomer => guard.customer_selected,
            Self::BuildItems => guard.has_items,
            Self::Finalize => false,
        }
    }

    /// Guarded forward transition; `None` when the guard rejects
    pub fn advance(self, guard: GuardState) -> Option<Self> {
        if self.can_advance(guard) { self.next() } else { None }
    }
}
