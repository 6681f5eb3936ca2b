//! Adapters layer
//!
//! Concrete implementations of the domain port traits.

pub mod tax;
pub mod validation;

pub use tax::{BracketedTaxCalculator, FlatRateTaxCalculator, TaxBracket};
pub use validation::NonNegativeSalaryValidator;
