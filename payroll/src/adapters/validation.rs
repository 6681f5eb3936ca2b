//! Salary validation adapter

use crate::domain::ports::EmployeeValidator;

/// Accepts any salary that is zero or positive
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegativeSalaryValidator;

impl EmployeeValidator for NonNegativeSalaryValidator {
    fn is_valid_salary(&self, salary: f64) -> bool {
        // NaN fails this comparison as well
        salary >= 0.0
    }
}
