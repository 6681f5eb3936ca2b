//! Tax policy port trait
//!
//! Any tax jurisdiction can be plugged into an employee through this trait
//! without touching the employee or its validator.

/// Computes the tax owed on a gross salary
#[cfg_attr(test, mockall::automock)]
pub trait TaxCalculator: Send + Sync {
    /// Tax owed on `salary`. Must be a total function over valid salaries.
    fn calculate_taxes(&self, salary: f64) -> f64;
}
