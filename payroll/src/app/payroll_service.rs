//! Payroll service
//!
//! Hires employees against a shared pair of collaborators and summarizes
//! a payroll run.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{Employee, Payslip};
use crate::domain::ports::{EmployeeValidator, TaxCalculator};
use crate::error::DomainError;

/// A proposed salary that failed validation during a payroll run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedSalary {
    pub salary: f64,
    pub reason: String,
}

/// Outcome of running payroll over a batch of proposed salaries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PayrollReport {
    pub payslips: Vec<Payslip>,
    pub rejected: Vec<RejectedSalary>,
    pub total_gross: f64,
    pub total_taxes: f64,
    pub total_net: f64,
}

impl PayrollReport {
    fn record(&mut self, payslip: Payslip) {
        self.total_gross += payslip.gross_salary;
        self.total_taxes += payslip.taxes;
        self.total_net += payslip.net_salary;
        self.payslips.push(payslip);
    }
}

/// Service for hiring employees and running payroll
pub struct PayrollService<T, V>
where
    T: TaxCalculator,
    V: EmployeeValidator,
{
    tax_calculator: Arc<T>,
    validator: Arc<V>,
}

impl<T, V> PayrollService<T, V>
where
    T: TaxCalculator,
    V: EmployeeValidator,
{
    pub fn new(tax_calculator: Arc<T>, validator: Arc<V>) -> Self {
        Self {
            tax_calculator,
            validator,
        }
    }

    /// Hire an employee at `salary`, sharing this service's collaborators
    pub fn hire(&self, salary: f64) -> Result<Employee<T, V>, DomainError> {
        match Employee::new(salary, self.tax_calculator.clone(), self.validator.clone()) {
            Ok(employee) => {
                tracing::debug!(salary, net_salary = employee.net_salary(), "Employee hired");
                Ok(employee)
            }
            Err(e) => {
                tracing::warn!(salary, error = %e, "Rejected salary");
                Err(e)
            }
        }
    }

    /// Hire every salary in order; invalid ones are reported, not fatal
    pub fn run(&self, salaries: &[f64]) -> PayrollReport {
        let mut report = PayrollReport::default();

        for &salary in salaries {
            match self.hire(salary) {
                Ok(employee) => report.record(employee.payslip()),
                Err(e) => report.rejected.push(RejectedSalary {
                    salary,
                    reason: e.to_string(),
                }),
            }
        }

        tracing::info!(
            accepted = report.payslips.len(),
            rejected = report.rejected.len(),
            total_net = report.total_net,
            "Payroll run complete"
        );

        report
    }
}
