#![doc = include_str!("../README.md")]

mod cli;

use actuator_tonic_core::proto::{
    ControlAction, ControlActuatorRequest, GetActuatorStatusRequest,
    actuator_manager_service_client::ActuatorManagerServiceClient,
};
use anyhow::Context;
use clap::Parser;
use cli::{CliArgs, Command};
use tonic::{codec::CompressionEncoding, transport::Channel};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let channel = Channel::from_shared(args.addr.clone())
        .with_context(|| format!("invalid address {}", args.addr))?
        .connect()
        .await
        .with_context(|| format!("failed to connect to {}", args.addr))?;

    let mut client = ActuatorManagerServiceClient::new(channel);
    if let Some(encoding) = Option::<CompressionEncoding>::from(args.compression) {
        client = client
            .send_compressed(encoding)
            .accept_compressed(encoding);
    }

    match args.command {
        Command::Control { device_id, action } => {
            let request = ControlActuatorRequest {
                device_id,
                action: ControlAction::from(action) as i32,
            };
            tracing::info!("Sending ControlActuator to {}: {request:?}", args.addr);

            let response = client.control_actuator(request).await?.into_inner();
            println!("{response:#?}");
        }
        Command::Status { device_id } => {
            tracing::info!("Querying actuator status: {device_id} from {}", args.addr);

            let actuator = client
                .get_actuator_status(GetActuatorStatusRequest { device_id })
                .await?
                .into_inner();
            println!("{actuator:#?}");
        }
    }

    Ok(())
}
