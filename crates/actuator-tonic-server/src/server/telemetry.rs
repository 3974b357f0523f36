//! # Console logging
//!
//! The server logs through `tracing`. A single `tracing_subscriber` registry is
//! installed at startup with:
//!
//! - an [`EnvFilter`] read from `RUST_LOG` (defaults to `info`)
//! - a `fmt` layer printing thread ids, source locations and RFC 3339 local
//!   timestamps, either pretty-printed or as JSON lines
//!
//! Per-call events are emitted inside the `control_actuator` and
//! `get_actuator_status` spans, so every line carries the `device_id` it was
//! logged for.

use crate::server::config::LogFormat;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()));

    let layer = fmt::layer()
        .with_thread_ids(true)
        .with_line_number(true)
        .with_target(false)
        .with_timer(fmt::time::ChronoLocal::rfc_3339())
        .with_file(true);

    match format {
        LogFormat::Pretty => registry.with(layer.pretty()).try_init()?,
        LogFormat::Json => registry.with(layer.json()).try_init()?,
    }

    Ok(())
}
