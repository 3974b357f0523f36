use anyhow::bail;
use clap::{Parser, ValueEnum};
use core::time::Duration;

/// Runtime configuration for the `actuator-tonic-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file is loaded first, if present), with defaults matching the endpoint the
/// device-control component expects.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "actuator-tonic-server",
    version,
    about = "A gRPC endpoint answering actuator control requests with mock state"
)]
pub struct CliArgs {
    /// Address to listen on (TCP or Unix socket path; use --uds for Unix
    /// socket).
    ///
    /// Example: "0.0.0.0:50051" or "/tmp/actuator.sock"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:50051"))]
    pub server_addr: String,

    /// Listen on a Unix socket instead of TCP. If set, `SERVER_ADDR` must be a
    /// file path.
    #[arg(short, long, default_value_t = false)]
    pub uds: bool,

    /// Number of worker tasks executing calls concurrently.
    ///
    /// Environment variable: `NUM_WORKERS`
    #[arg(long, env = "NUM_WORKERS", default_value_t = 10)]
    pub num_workers: usize,

    /// Capacity of each worker's request queue. Callers wait for a free slot
    /// when a worker's queue is full.
    ///
    /// Environment variable: `WORKER_QUEUE_SIZE`
    #[arg(long, env = "WORKER_QUEUE_SIZE", default_value_t = 64)]
    pub worker_queue_size: usize,

    /// Seconds to wait for each worker to acknowledge shutdown.
    ///
    /// Environment variable: `SHUTDOWN_TIMEOUT`
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 3)]
    pub shutdown_timeout: u64,

    /// Console log output format.
    ///
    /// Environment variable: `LOG_FORMAT`
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Output format of the console log layer.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human-readable events.
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub uds: bool,
    pub num_workers: usize,
    pub worker_queue_size: usize,
    pub shutdown_timeout: Duration,
    pub log_format: LogFormat,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.num_workers == 0 {
            bail!("NUM_WORKERS must be greater than 0");
        }

        if args.worker_queue_size == 0 {
            bail!("WORKER_QUEUE_SIZE must be greater than 0");
        }

        if cfg!(not(unix)) && args.uds {
            bail!("Unix domain sockets are not supported on this platform");
        }

        Ok(Self {
            server_addr: args.server_addr,
            uds: args.uds,
            num_workers: args.num_workers,
            worker_queue_size: args.worker_queue_size,
            shutdown_timeout: Duration::from_secs(args.shutdown_timeout),
            log_format: args.log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> anyhow::Result<ServerConfig> {
        let args = CliArgs::try_parse_from(
            core::iter::once("actuator-tonic-server").chain(extra.iter().copied()),
        )?;
        ServerConfig::try_from(args)
    }

    #[test]
    fn defaults_listen_on_all_interfaces_with_ten_workers() -> anyhow::Result<()> {
        let config = parse(&[])?;
        assert_eq!(config.server_addr, "0.0.0.0:50051");
        assert!(!config.uds);
        assert_eq!(config.num_workers, 10);
        assert_eq!(config.worker_queue_size, 64);
        assert_eq!(config.shutdown_timeout, Duration::from_secs(3));
        assert_eq!(config.log_format, LogFormat::Pretty);
        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> anyhow::Result<()> {
        let config = parse(&[
            "--server-addr",
            "127.0.0.1:6000",
            "--num-workers",
            "4",
            "--worker-queue-size",
            "8",
            "--shutdown-timeout",
            "1",
            "--log-format",
            "json",
        ])?;
        assert_eq!(config.server_addr, "127.0.0.1:6000");
        assert_eq!(config.num_workers, 4);
        assert_eq!(config.worker_queue_size, 8);
        assert_eq!(config.shutdown_timeout, Duration::from_secs(1));
        assert_eq!(config.log_format, LogFormat::Json);
        Ok(())
    }

    #[test]
    fn rejects_zero_workers() {
        let err = parse(&["--num-workers", "0"]).unwrap_err();
        assert!(err.to_string().contains("NUM_WORKERS"));
    }

    #[test]
    fn rejects_zero_queue_size() {
        let err = parse(&["--worker-queue-size", "0"]).unwrap_err();
        assert!(err.to_string().contains("WORKER_QUEUE_SIZE"));
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(CliArgs::try_parse_from(["actuator-tonic-server", "--log-format", "xml"]).is_err());
    }
}
