//! Error types for the actuator control service.
//!
//! The mock handler operations are total, so nothing in here describes a bad
//! request. These variants cover the dispatch path between the gRPC front end
//! and the worker pool, and only surface while the host is going down. `From<Error>`
//! for `tonic::Status` lets handlers propagate them with `?`.
//!
//! ## Error Cases
//! - `ChannelError`: A worker queue or reply channel was closed.
//! - `ServiceShutdown`: A request arrived while the service was shutting down.

use tonic::Status;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the actuator control service.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Internal channel send/receive failure between the service and a worker.
    #[error("Channel error: {context}")]
    ChannelError { context: String },

    /// The service is in the process of shutting down.
    #[error("Service is shutting down")]
    ServiceShutdown,
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::ChannelError { context } => Status::internal(format!("Channel error: {context}")),
            Error::ServiceShutdown => Status::unavailable("Service is shutting down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn shutdown_maps_to_unavailable() {
        let status = Status::from(Error::ServiceShutdown);
        assert_eq!(status.code(), Code::Unavailable);
        assert_eq!(status.message(), "Service is shutting down");
    }

    #[test]
    fn channel_error_maps_to_internal_with_context() {
        let status = Status::from(Error::ChannelError {
            context: "Worker 3 channel closed".to_string(),
        });
        assert_eq!(status.code(), Code::Internal);
        assert!(status.message().contains("Worker 3 channel closed"));
    }
}
