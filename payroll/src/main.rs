//! Payroll demo
//!
//! Runs payroll over salaries read from the environment and prints the
//! report as JSON on stdout.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use srp_payroll::{Config, FlatRateTaxCalculator, NonNegativeSalaryValidator, PayrollService};

fn main() -> Result<()> {
    // Initialize logging to stderr (stdout carries the report)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,srp_payroll=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting payroll run...");

    let config = Config::from_env()?;
    tracing::info!(
        tax_rate = config.tax_rate,
        salaries = config.salaries.len(),
        "Configuration loaded"
    );

    // Collaborators are created once and shared by every employee
    let tax_calculator = Arc::new(FlatRateTaxCalculator::try_new(config.tax_rate)?);
    let validator = Arc::new(NonNegativeSalaryValidator);
    let service = PayrollService::new(tax_calculator, validator);

    let report = service.run(&config.salaries);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
