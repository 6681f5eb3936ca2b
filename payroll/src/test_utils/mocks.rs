//! Hand-written collaborator implementations for tests

use std::sync::Mutex;

use crate::domain::ports::{EmployeeValidator, TaxCalculator};

// ============================================================================
// Validators
// ============================================================================

/// Accepts every salary, including negative ones
#[derive(Debug, Default)]
pub struct AcceptAllValidator;

impl EmployeeValidator for AcceptAllValidator {
    fn is_valid_salary(&self, _salary: f64) -> bool {
        true
    }
}

/// Non-negative validator that remembers every salary it was asked about
#[derive(Debug, Default)]
pub struct RecordingValidator {
    seen: Mutex<Vec<f64>>,
}

impl RecordingValidator {
    pub fn non_negative() -> Self {
        Self::default()
    }

    /// Salaries checked so far, in call order
    pub fn seen(&self) -> Vec<f64> {
        self.seen.lock().unwrap().clone()
    }
}

impl EmployeeValidator for RecordingValidator {
    fn is_valid_salary(&self, salary: f64) -> bool {
        self.seen.lock().unwrap().push(salary);
        salary >= 0.0
    }
}

// ============================================================================
// Tax calculators
// ============================================================================

/// Charges the same amount regardless of salary
#[derive(Debug)]
pub struct FixedTaxCalculator {
    amount: f64,
}

impl FixedTaxCalculator {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl TaxCalculator for FixedTaxCalculator {
    fn calculate_taxes(&self, _salary: f64) -> f64 {
        self.amount
    }
}
