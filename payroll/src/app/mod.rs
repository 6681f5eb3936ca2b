//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and the injected collaborators.

pub mod payroll_service;

pub use payroll_service::{PayrollReport, PayrollService, RejectedSalary};
