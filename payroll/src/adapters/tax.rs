//! Tax policy adapters
//!
//! Two interchangeable jurisdictions: a flat rate and marginal brackets.

use serde::{Deserialize, Serialize};

use crate::domain::ports::TaxCalculator;
use crate::error::DomainError;

/// Flat rate applied when no other rate is configured
pub const DEFAULT_TAX_RATE: f64 = 0.2;

fn check_rate(rate: f64) -> Result<(), DomainError> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(DomainError::InvalidInput(format!(
            "Tax rate must be between 0 and 1, got {}",
            rate
        )));
    }
    Ok(())
}

/// Taxes every unit of salary at the same rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatRateTaxCalculator {
    rate: f64,
}

impl FlatRateTaxCalculator {
    pub fn try_new(rate: f64) -> Result<Self, DomainError> {
        check_rate(rate)?;
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for FlatRateTaxCalculator {
    fn default() -> Self {
        Self {
            rate: DEFAULT_TAX_RATE,
        }
    }
}

impl TaxCalculator for FlatRateTaxCalculator {
    fn calculate_taxes(&self, salary: f64) -> f64 {
        salary * self.rate
    }
}

/// One band of a progressive schedule: income above `lower_bound` (up to the
/// next band) is taxed at `rate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: f64,
    pub rate: f64,
}

impl TaxBracket {
    pub fn new(lower_bound: f64, rate: f64) -> Self {
        Self { lower_bound, rate }
    }
}

/// Marginal tax over an ordered list of brackets
#[derive(Debug, Clone, PartialEq)]
pub struct BracketedTaxCalculator {
    brackets: Vec<TaxBracket>,
}

impl BracketedTaxCalculator {
    /// Brackets must start at 0 and have strictly increasing lower bounds
    pub fn try_new(brackets: Vec<TaxBracket>) -> Result<Self, DomainError> {
        let first = brackets.first().ok_or_else(|| {
            DomainError::InvalidInput("At least one tax bracket is required".to_string())
        })?;
        if first.lower_bound != 0.0 {
            return Err(DomainError::InvalidInput(
                "First tax bracket must start at 0".to_string(),
            ));
        }

        for bracket in &brackets {
            check_rate(bracket.rate)?;
        }

        for pair in brackets.windows(2) {
            let increasing = pair[1].lower_bound > pair[0].lower_bound;
            if !increasing || !pair[1].lower_bound.is_finite() {
                return Err(DomainError::InvalidInput(format!(
                    "Tax bracket bounds must be strictly increasing, got {} after {}",
                    pair[1].lower_bound, pair[0].lower_bound
                )));
            }
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

impl TaxCalculator for BracketedTaxCalculator {
    fn calculate_taxes(&self, salary: f64) -> f64 {
        let mut taxes = 0.0;
        for (i, bracket) in self.brackets.iter().enumerate() {
            if salary <= bracket.lower_bound {
                break;
            }
            let upper = self
                .brackets
                .get(i + 1)
                .map_or(f64::INFINITY, |next| next.lower_bound);
            taxes += (salary.min(upper) - bracket.lower_bound) * bracket.rate;
        }
        taxes
    }
}
