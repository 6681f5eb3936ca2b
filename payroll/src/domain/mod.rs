//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core payroll concepts
//! - `ports`: Capability traits the entities depend on

pub mod entities;
pub mod ports;
