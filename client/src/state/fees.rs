//! Fee-ledger state: structures per class and submitted payments.

#[cfg(test)]
#[path = "fees_test.rs"]
mod fees_test;

use records::{FeePayment, FeeStructure};

/// Fees page state.
#[derive(Clone, Debug, Default)]
pub struct FeesState {
    pub structures: Vec<FeeStructure>,
    pub payments: Vec<FeePayment>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FeesState {
    /// Total amount collected across all recorded payments.
    #[must_use]
    pub fn total_collected(&self) -> f64 {
        FeePayment::total_collected(&self.payments)
    }

    /// The fee structure for a class level, if one is defined.
    #[must_use]
    pub fn structure_for(&self, class_level: &str) -> Option<&FeeStructure> {
        self.structures
            .iter()
            .find(|s| s.class_level == class_level)
    }
}
