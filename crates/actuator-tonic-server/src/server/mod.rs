//! Server-side components of the actuator control service.
//!
//! ## Submodules
//!
//! - [`config`] - CLI/env configuration.
//! - [`host`] - Listener binding, server assembly and shutdown signalling.
//! - [`pool`] - Bounded worker pool executing calls.
//! - [`service`] - gRPC service implementation and mock synthesis.
//! - [`telemetry`] - Console logging setup.

pub mod config;
pub mod host;
pub mod pool;
pub mod service;
pub mod telemetry;
