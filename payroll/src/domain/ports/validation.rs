//! Employee validation port trait

/// Decides whether proposed employee data is acceptable
#[cfg_attr(test, mockall::automock)]
pub trait EmployeeValidator: Send + Sync {
    /// Returns `true` if `salary` may be stored on an employee
    fn is_valid_salary(&self, salary: f64) -> bool;
}
