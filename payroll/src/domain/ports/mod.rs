//! Domain ports (traits)
//!
//! Port traits define the narrow capabilities the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod tax;
pub mod validation;

pub use tax::TaxCalculator;
pub use validation::EmployeeValidator;

#[cfg(test)]
pub use tax::MockTaxCalculator;
#[cfg(test)]
pub use validation::MockEmployeeValidator;
