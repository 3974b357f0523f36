//! gRPC service implementation for actuator control.
//!
//! This module defines [`ActuatorService`], the concrete implementation of the
//! [`ActuatorManagerService`] gRPC service defined in `proto/actuator.proto`.
//! It is handed to the generated server by composition.
//!
//! ## Responsibilities
//!
//! - Spawn and own the background [`WorkerPool`].
//! - Log every received call.
//! - Forward each call to a worker and return the worker's answer.

use crate::server::{
    config::ServerConfig,
    pool::{manager::WorkerPool, request::WorkRequest},
    service::actuator::action_name,
};
use actuator_tonic_core::{
    Error,
    proto::{
        Actuator, ControlActuatorRequest, ControlActuatorResponse, GetActuatorStatusRequest,
        actuator_manager_service_server::ActuatorManagerService,
    },
};
use std::sync::Arc;
use tonic::{Request, Response, Status};

/// Mock actuator manager.
///
/// Cloning is cheap: clones share the same worker pool.
#[derive(Clone)]
pub struct ActuatorService {
    worker_pool: Arc<WorkerPool>,
}

impl ActuatorService {
    /// Creates a new `ActuatorService` and spawns its worker pool.
    pub fn new(config: &ServerConfig) -> Self {
        let worker_pool = WorkerPool::spawn(config);
        tracing::debug!("Spawned {} workers", worker_pool.num_workers());

        Self {
            worker_pool: Arc::new(worker_pool),
        }
    }

    /// Stops the worker pool. Calls arriving afterwards fail with
    /// `UNAVAILABLE`.
    pub async fn shutdown(&self) -> Result<(), Error> {
        self.worker_pool.shutdown().await
    }
}

#[tonic::async_trait]
impl ActuatorManagerService for ActuatorService {
    #[tracing::instrument(skip_all, fields(device_id = %req.get_ref().device_id))]
    async fn control_actuator(
        &self,
        req: Request<ControlActuatorRequest>,
    ) -> Result<Response<ControlActuatorResponse>, Status> {
        let request = req.into_inner();

        tracing::info!(
            device_id = %request.device_id,
            action = %action_name(request.action),
            "ControlActuator received"
        );
        tracing::debug!("Request: {request:#?}");

        let response = self
            .worker_pool
            .call(|response| WorkRequest::Control { request, response })
            .await?;

        Ok(Response::new(response))
    }

    #[tracing::instrument(skip_all, fields(device_id = %req.get_ref().device_id))]
    async fn get_actuator_status(
        &self,
        req: Request<GetActuatorStatusRequest>,
    ) -> Result<Response<Actuator>, Status> {
        let request = req.into_inner();

        tracing::info!(device_id = %request.device_id, "GetActuatorStatus received");

        let actuator = self
            .worker_pool
            .call(|response| WorkRequest::Status { request, response })
            .await?;

        Ok(Response::new(actuator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::LogFormat;
    use actuator_tonic_core::proto::{ActuatorMode, ActuatorStatus, ControlAction};
    use core::time::Duration;
    use tonic::Code;

    fn service() -> ActuatorService {
        ActuatorService::new(&ServerConfig {
            server_addr: "127.0.0.1:0".to_string(),
            uds: false,
            num_workers: 2,
            worker_queue_size: 4,
            shutdown_timeout: Duration::from_secs(1),
            log_format: LogFormat::Pretty,
        })
    }

    async fn control(
        service: &ActuatorService,
        device_id: &str,
        action: ControlAction,
    ) -> Result<Actuator, Status> {
        let response = service
            .control_actuator(Request::new(ControlActuatorRequest {
                device_id: device_id.to_string(),
                action: action as i32,
            }))
            .await?;
        Ok(response.into_inner().actuator.unwrap_or_default())
    }

    #[tokio::test]
    async fn control_turn_on_then_turn_off() -> Result<(), Status> {
        let service = service();

        let on = control(&service, "A1", ControlAction::TurnOn).await?;
        assert_eq!(on.device_id, "A1");
        assert_eq!(on.name, "Pump A1");
        assert_eq!(on.status(), ActuatorStatus::On);
        assert_eq!(on.mode(), ActuatorMode::Manual);

        let off = control(&service, "A1", ControlAction::TurnOff).await?;
        assert_eq!(off.status(), ActuatorStatus::Off);

        service.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn status_does_not_track_control_calls() -> Result<(), Status> {
        let service = service();

        control(&service, "A1", ControlAction::TurnOn).await?;
        let status = service
            .get_actuator_status(Request::new(GetActuatorStatusRequest {
                device_id: "A1".to_string(),
            }))
            .await?
            .into_inner();

        assert_eq!(status.device_id, "A1");
        assert_eq!(status.status(), ActuatorStatus::Off);
        assert_eq!(status.mode(), ActuatorMode::Manual);

        service.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn calls_after_shutdown_are_unavailable() -> Result<(), Status> {
        let service = service();
        service.shutdown().await?;

        let status = control(&service, "A1", ControlAction::TurnOn)
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::Unavailable);
        Ok(())
    }
}
