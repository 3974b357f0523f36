use actuator_tonic_core::proto::{
    Actuator, ControlActuatorRequest, ControlActuatorResponse, GetActuatorStatusRequest,
};
use tokio::sync::oneshot;

/// A message sent from the worker pool to an individual worker task.
///
/// Each call variant carries the decoded request and a one-shot channel for
/// the reply. If the caller has gone away by the time the worker answers, the
/// reply is dropped.
#[derive(Debug)]
pub enum WorkRequest {
    /// Run `ControlActuator` for `request`.
    Control {
        request: ControlActuatorRequest,
        response: oneshot::Sender<ControlActuatorResponse>,
    },

    /// Run `GetActuatorStatus` for `request`.
    Status {
        request: GetActuatorStatusRequest,
        response: oneshot::Sender<Actuator>,
    },

    /// Request the worker to stop.
    ///
    /// - `response`: One-shot channel for acknowledging that the worker has
    ///   left its loop.
    Shutdown { response: oneshot::Sender<()> },
}
