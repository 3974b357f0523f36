//! Process host: binds the listener, assembles the tonic server around
//! [`ActuatorService`], and stops both when the shutdown signal fires.
//!
//! Lifecycle is `Unstarted -> Listening -> Stopped`. Binding is the only
//! fallible transition; its error is returned to `main` as-is and nothing is
//! retried.

use crate::server::{config::ServerConfig, service::handler::ActuatorService};
use actuator_tonic_core::proto::{
    FILE_DESCRIPTOR_SET, actuator_manager_service_server::ActuatorManagerServiceServer,
};
use anyhow::Context;
use futures::Stream;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpListener;
use tokio::signal;
use tonic::transport::server::Connected;
use tonic::{codec::CompressionEncoding, transport::Server};
use tonic_reflection::server::Builder;
use tonic_web::GrpcWebLayer;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Binds a TCP listener on `addr`.
///
/// # Errors
///
/// Fails if the address cannot be parsed or is unavailable (already in use,
/// permission denied).
pub async fn bind_tcp(addr: &str) -> anyhow::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Binds a Unix domain socket listener at `path`.
///
/// # Errors
///
/// Fails if the socket file cannot be created (for instance because it already
/// exists).
#[cfg(unix)]
pub fn bind_uds(path: &str) -> anyhow::Result<tokio::net::UnixListener> {
    tokio::net::UnixListener::bind(path).with_context(|| format!("failed to bind {path}"))
}

/// Serves the actuator service on `incoming` until `signal` resolves.
///
/// On `signal` the worker pool is stopped and the tonic server stops
/// accepting connections; the function returns once the server has wound
/// down.
pub async fn run_server_with_incoming<I, IO, IE, F>(
    incoming: I,
    config: ServerConfig,
    signal: F,
) -> anyhow::Result<()>
where
    I: Stream<Item = Result<IO, IE>>,
    IO: AsyncRead + AsyncWrite + Connected + Unpin + Send + 'static,
    IE: Into<tower::BoxError>,
    F: Future<Output = ()> + Send,
{
    let service = ActuatorService::new(&config);

    let reflection = Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    Server::builder()
        .accept_http1(true)
        .http2_adaptive_window(Some(true))
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(GrpcWebLayer::new()),
        )
        .add_service(reflection)
        .add_service(build_actuator_service(service.clone()))
        .serve_with_incoming_shutdown(incoming, stop_service_on(signal, service))
        .await?;

    tracing::info!("Service shut down successfully");
    Ok(())
}

pub fn log_startup_info(addr: &str, config: &ServerConfig) {
    if cfg!(debug_assertions) {
        tracing::info!(
            "Starting actuator service on {} with full config: {:#?}",
            addr,
            config
        );
    } else {
        tracing::info!(
            "Starting actuator service on {} with {} workers",
            addr,
            config.num_workers
        );
    }
}

fn build_actuator_service(service: ActuatorService) -> ActuatorManagerServiceServer<ActuatorService> {
    ActuatorManagerServiceServer::new(service)
        .send_compressed(CompressionEncoding::Zstd)
        .send_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Deflate)
        .accept_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Gzip)
        .accept_compressed(CompressionEncoding::Deflate)
}

async fn stop_service_on<F>(signal: F, service: ActuatorService)
where
    F: Future<Output = ()>,
{
    signal.await;

    tracing::info!("Shutdown signal received, terminating...");

    if let Err(e) = service.shutdown().await {
        tracing::error!("Error during service shutdown: {e:?}");
    }
}

/// Resolves on Ctrl+C, or on SIGTERM on unix.
///
/// If a handler cannot be installed the error is logged and that signal is
/// never observed.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        () = terminate => tracing::info!("Received SIGTERM signal"),
    }
}
