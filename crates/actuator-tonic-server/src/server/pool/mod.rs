//! Bounded worker pool executing actuator calls.
//!
//! - [`manager`] - [`manager::WorkerPool`], round-robin dispatch and shutdown.
//! - [`request`] - [`request::WorkRequest`], the message a worker consumes.
//! - [`worker`] - the per-worker event loop.

pub mod manager;
pub mod request;
pub mod worker;
