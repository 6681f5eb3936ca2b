//! Payslip domain entity

use serde::{Deserialize, Serialize};

/// Gross/tax/net breakdown of one employee's salary at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    pub gross_salary: f64,
    pub taxes: f64,
    pub net_salary: f64,
}
