//! Test fixtures
//!
//! Factory functions for creating collaborators and services with sensible defaults.

use std::sync::Arc;

use crate::adapters::{FlatRateTaxCalculator, NonNegativeSalaryValidator, TaxBracket};
use crate::app::PayrollService;
use crate::test_utils::AcceptAllValidator;

/// Flat 20% tax calculator
pub fn default_tax_calculator() -> Arc<FlatRateTaxCalculator> {
    Arc::new(FlatRateTaxCalculator::default())
}

/// Validator rejecting negative salaries
pub fn default_validator() -> Arc<NonNegativeSalaryValidator> {
    Arc::new(NonNegativeSalaryValidator)
}

pub fn accept_all_validator() -> Arc<AcceptAllValidator> {
    Arc::new(AcceptAllValidator)
}

/// Payroll service wired with the default collaborators
pub fn test_payroll_service() -> PayrollService<FlatRateTaxCalculator, NonNegativeSalaryValidator>
{
    PayrollService::new(default_tax_calculator(), default_validator())
}

/// 0% up to 1000, 10% up to 5000, 30% above
pub fn sample_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket::new(0.0, 0.0),
        TaxBracket::new(1000.0, 0.1),
        TaxBracket::new(5000.0, 0.3),
    ]
}

/// Assert two amounts are equal within floating point noise
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}
