//! Domain entities
//!
//! Pure domain models representing core payroll concepts.

pub mod employee;
pub mod payslip;

pub use employee::Employee;
pub use payslip::Payslip;
