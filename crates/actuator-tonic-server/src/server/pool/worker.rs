use crate::server::{
    pool::request::WorkRequest,
    service::actuator::{actuator_status, control_actuator},
};
use tokio::sync::mpsc;

/// Worker task responsible for processing [`WorkRequest`] messages.
///
/// The worker listens on its MPSC channel and runs each call to completion
/// before taking the next one. It exits when it receives
/// [`WorkRequest::Shutdown`] or when every sender has been dropped. Requests
/// still queued behind a shutdown are dropped with the receiver, which closes
/// their reply channels.
///
/// # Arguments
///
/// - `worker_id`: Index of this worker in the pool (used for logs).
/// - `rx`: Receiver through which [`WorkRequest`]s are received.
pub async fn worker_loop(worker_id: usize, mut rx: mpsc::Receiver<WorkRequest>) {
    tracing::trace!("Worker {worker_id} started");

    while let Some(work) = rx.recv().await {
        match work {
            WorkRequest::Control { request, response } => {
                if response.send(control_actuator(request)).is_err() {
                    tracing::debug!("Worker {worker_id}: ControlActuator caller went away");
                }
            }
            WorkRequest::Status { request, response } => {
                if response.send(actuator_status(request)).is_err() {
                    tracing::debug!("Worker {worker_id}: GetActuatorStatus caller went away");
                }
            }
            WorkRequest::Shutdown { response } => {
                tracing::debug!("Worker {worker_id} received shutdown signal");

                if response.send(()).is_err() {
                    tracing::error!("Worker {worker_id} failed to acknowledge shutdown");
                }
                break;
            }
        }
    }

    tracing::trace!("Worker {worker_id} stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use actuator_tonic_core::proto::{
        ActuatorStatus, ControlAction, ControlActuatorRequest, GetActuatorStatusRequest,
    };
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn answers_calls_in_order_until_shutdown() {
        let (tx, rx) = mpsc::channel(4);
        let handle = tokio::spawn(worker_loop(0, rx));

        let (control_tx, control_rx) = oneshot::channel();
        tx.send(WorkRequest::Control {
            request: ControlActuatorRequest {
                device_id: "A1".to_string(),
                action: ControlAction::TurnOn as i32,
            },
            response: control_tx,
        })
        .await
        .unwrap();

        let (status_tx, status_rx) = oneshot::channel();
        tx.send(WorkRequest::Status {
            request: GetActuatorStatusRequest {
                device_id: "A1".to_string(),
            },
            response: status_tx,
        })
        .await
        .unwrap();

        let (ack_tx, ack_rx) = oneshot::channel();
        tx.send(WorkRequest::Shutdown { response: ack_tx })
            .await
            .unwrap();

        let control = control_rx.await.unwrap().actuator.unwrap();
        assert_eq!(control.status(), ActuatorStatus::On);
        let status = status_rx.await.unwrap();
        assert_eq!(status.status(), ActuatorStatus::Off);

        ack_rx.await.unwrap();
        handle.await.unwrap();
        assert!(tx.is_closed());
    }

    #[tokio::test]
    async fn drops_requests_queued_behind_shutdown() {
        let (tx, rx) = mpsc::channel(4);

        let (ack_tx, ack_rx) = oneshot::channel();
        tx.send(WorkRequest::Shutdown { response: ack_tx })
            .await
            .unwrap();
        let (status_tx, status_rx) = oneshot::channel();
        tx.send(WorkRequest::Status {
            request: GetActuatorStatusRequest {
                device_id: "late".to_string(),
            },
            response: status_tx,
        })
        .await
        .unwrap();

        worker_loop(7, rx).await;

        ack_rx.await.unwrap();
        assert!(status_rx.await.is_err());
    }

    #[tokio::test]
    async fn exits_when_all_senders_are_dropped() {
        let (tx, rx) = mpsc::channel::<WorkRequest>(1);
        drop(tx);
        worker_loop(0, rx).await;
    }
}
