//! Payroll example of the single responsibility principle
//!
//! An `Employee` holds a validated salary and exposes its net pay. Validation
//! and tax computation live in collaborators injected through the
//! `EmployeeValidator` and `TaxCalculator` ports, so either can change without
//! touching the employee.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use adapters::{
    BracketedTaxCalculator, FlatRateTaxCalculator, NonNegativeSalaryValidator, TaxBracket,
};
pub use app::{PayrollReport, PayrollService, RejectedSalary};
pub use config::Config;
pub use domain::entities::{Employee, Payslip};
pub use domain::ports::{EmployeeValidator, TaxCalculator};
pub use error::{AppError, DomainError};
