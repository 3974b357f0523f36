//! gRPC service implementation.
//!
//! ## Structure
//!
//! - [`handler`] - gRPC service entry point (`ActuatorService`).
//! - [`actuator`] - Mock actuator synthesis executed by the workers.

pub mod actuator;
pub mod handler;
