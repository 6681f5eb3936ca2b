//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Call-count expectations use the mockall mocks generated on the port traits;
//! the collaborators here cover behavior those mocks make awkward to express.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
