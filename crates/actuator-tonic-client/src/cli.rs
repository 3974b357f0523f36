use actuator_tonic_core::proto::ControlAction;
use clap::{Parser, Subcommand, ValueEnum};
use tonic::codec::CompressionEncoding;

#[derive(Parser, Debug)]
#[command(
    name = "actuator-tonic-client",
    version,
    about = "Send control and status requests to an actuator gRPC endpoint"
)]
pub struct CliArgs {
    /// Endpoint URI of the actuator service.
    ///
    /// Environment variable: `ACTUATOR_ADDR`
    #[arg(long, env = "ACTUATOR_ADDR", default_value_t = String::from("http://127.0.0.1:50051"))]
    pub addr: String,

    /// Compression used for requests and accepted for responses.
    #[arg(long, value_enum, default_value_t = Compression::None)]
    pub compression: Compression,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Turn a device on or off (`ControlActuator`).
    Control {
        device_id: String,
        #[arg(value_enum)]
        action: Action,
    },
    /// Query a device (`GetActuatorStatus`).
    Status { device_id: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    On,
    Off,
}

impl From<Action> for ControlAction {
    fn from(value: Action) -> Self {
        match value {
            Action::On => ControlAction::TurnOn,
            Action::Off => ControlAction::TurnOff,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Deflate,
    Gzip,
    Zstd,
}

impl From<Compression> for Option<CompressionEncoding> {
    fn from(value: Compression) -> Self {
        match value {
            Compression::None => None,
            Compression::Deflate => Some(CompressionEncoding::Deflate),
            Compression::Gzip => Some(CompressionEncoding::Gzip),
            Compression::Zstd => Some(CompressionEncoding::Zstd),
        }
    }
}
