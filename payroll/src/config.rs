use std::env;

use crate::adapters::tax::DEFAULT_TAX_RATE;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Flat tax rate applied by the demo payroll run
    pub tax_rate: f64,
    /// Proposed salaries to run payroll over
    pub salaries: Vec<f64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("PAYROLL_TAX_RATE").ok().as_deref(),
            env::var("PAYROLL_SALARIES").ok().as_deref(),
        )
    }

    /// Build a config from raw variable values; `None` falls back to defaults
    pub fn from_vars(tax_rate: Option<&str>, salaries: Option<&str>) -> Result<Self, AppError> {
        let tax_rate = match tax_rate {
            Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
                AppError::Config(format!("PAYROLL_TAX_RATE is not a number: {}", raw))
            })?,
            None => DEFAULT_TAX_RATE,
        };

        let salaries = match salaries {
            Some(raw) => parse_salaries(raw)?,
            None => vec![1000.0],
        };

        Ok(Self { tax_rate, salaries })
    }
}

fn parse_salaries(raw: &str) -> Result<Vec<f64>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>().map_err(|_| {
                AppError::Config(format!("PAYROLL_SALARIES contains a non-number: {}", s))
            })
        })
        .collect()
}
