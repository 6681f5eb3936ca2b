//! Employee domain entity
//!
//! An employee only holds its salary. Deciding whether a salary is acceptable
//! and how much tax it owes are delegated to injected collaborators.

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::Payslip;
use crate::domain::ports::{EmployeeValidator, TaxCalculator};
use crate::error::DomainError;

/// An employee with a validated, immutable gross salary
pub struct Employee<T, V>
where
    T: TaxCalculator,
    V: EmployeeValidator,
{
    salary: f64,
    tax_calculator: Arc<T>,
    validator: Arc<V>,
}

impl<T, V> Employee<T, V>
where
    T: TaxCalculator,
    V: EmployeeValidator,
{
    /// Create an employee, failing with `DomainError::InvalidInput` if the
    /// validator rejects `salary`
    pub fn new(
        salary: f64,
        tax_calculator: Arc<T>,
        validator: Arc<V>,
    ) -> Result<Self, DomainError> {
        if !validator.is_valid_salary(salary) {
            return Err(DomainError::invalid_salary());
        }

        Ok(Self {
            salary,
            tax_calculator,
            validator,
        })
    }

    /// Gross salary
    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Tax owed on the gross salary, recomputed on every call
    pub fn taxes(&self) -> f64 {
        self.tax_calculator.calculate_taxes(self.salary)
    }

    /// Gross salary minus taxes, recomputed on every call
    pub fn net_salary(&self) -> f64 {
        self.salary - self.taxes()
    }

    /// Snapshot of the current gross/tax/net split
    pub fn payslip(&self) -> Payslip {
        let taxes = self.taxes();
        Payslip {
            gross_salary: self.salary,
            taxes,
            net_salary: self.salary - taxes,
        }
    }

    /// Build a new employee with a different salary and the same collaborators.
    ///
    /// The validator runs again; `self` is never modified.
    pub fn with_salary(&self, salary: f64) -> Result<Self, DomainError> {
        Self::new(salary, self.tax_calculator.clone(), self.validator.clone())
    }
}

impl<T, V> Clone for Employee<T, V>
where
    T: TaxCalculator,
    V: EmployeeValidator,
{
    fn clone(&self) -> Self {
        Self {
            salary: self.salary,
            tax_calculator: self.tax_calculator.clone(),
            validator: self.validator.clone(),
        }
    }
}

impl<T, V> fmt::Debug for Employee<T, V>
where
    T: TaxCalculator,
    V: EmployeeValidator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Employee")
            .field("salary", &self.salary)
            .finish_non_exhaustive()
    }
}
