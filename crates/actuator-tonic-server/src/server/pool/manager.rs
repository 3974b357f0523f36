//! Asynchronous worker pool for actuator calls.
//!
//! This module defines the [`WorkerPool`] struct, which owns a fixed set of
//! worker tasks and hands each inbound call to one of them. Work is
//! distributed round-robin and shutdown is coordinated through a shared
//! [`CancellationToken`].
//!
//! Each worker listens on its own bounded [`mpsc::Receiver`]. Calls carry no
//! shared state, so any worker can serve any call and no locking is involved.

use crate::server::{
    config::ServerConfig,
    pool::{request::WorkRequest, worker::worker_loop},
};
use actuator_tonic_core::Error;
use core::time::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::{
    sync::{mpsc, oneshot},
    time::timeout,
};
use tokio_util::sync::CancellationToken;

/// A fixed-size pool of asynchronous workers that process [`WorkRequest`]s.
pub struct WorkerPool {
    workers: Vec<mpsc::Sender<WorkRequest>>,
    next_worker: AtomicUsize,
    shutdown_token: CancellationToken,
    shutdown_timeout: Duration,
}

impl WorkerPool {
    /// Constructs a new [`WorkerPool`] from initialized worker channels and a
    /// shared cancellation token.
    pub const fn new(
        workers: Vec<mpsc::Sender<WorkRequest>>,
        shutdown_token: CancellationToken,
        shutdown_timeout: Duration,
    ) -> Self {
        Self {
            workers,
            next_worker: AtomicUsize::new(0),
            shutdown_token,
            shutdown_timeout,
        }
    }

    /// Spawns `config.num_workers` worker tasks on the current Tokio runtime,
    /// each with a queue of `config.worker_queue_size` requests.
    pub fn spawn(config: &ServerConfig) -> Self {
        let mut workers = Vec::with_capacity(config.num_workers);

        for worker_id in 0..config.num_workers {
            let (tx, rx) = mpsc::channel(config.worker_queue_size);
            workers.push(tx);
            tokio::spawn(worker_loop(worker_id, rx));
        }

        Self::new(workers, CancellationToken::new(), config.shutdown_timeout)
    }

    /// Number of workers in the pool.
    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// Returns the index of the next worker to receive work (round-robin).
    ///
    /// Uses a relaxed atomic increment to minimize contention.
    pub fn next_worker_index(&self) -> usize {
        self.next_worker.fetch_add(1, Ordering::Relaxed) % self.workers.len()
    }

    /// Sends a [`WorkRequest`] to the next worker in the pool, waiting for
    /// queue capacity if that worker is busy.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The service is shutting down (`shutdown_token` was cancelled).
    /// - The worker's channel is closed.
    pub async fn send_to_next_worker(&self, request: WorkRequest) -> Result<(), Error> {
        if self.shutdown_token.is_cancelled() {
            return Err(Error::ServiceShutdown);
        }

        let worker_idx = self.next_worker_index();
        let worker = &self.workers[worker_idx];

        tokio::select! {
            biased;
            () = self.shutdown_token.cancelled() => Err(Error::ServiceShutdown),
            sent = worker.send(request) => sent.map_err(|_| Error::ChannelError {
                context: format!("Worker {worker_idx} channel closed"),
            }),
        }
    }

    /// Dispatches a call and waits for the worker's reply.
    ///
    /// `make` receives the reply sender and builds the [`WorkRequest`] to
    /// enqueue.
    ///
    /// # Errors
    ///
    /// Fails like [`send_to_next_worker`](Self::send_to_next_worker), or with
    /// [`Error::ChannelError`] if the worker dropped the request without
    /// answering (it was queued behind a shutdown).
    pub async fn call<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> WorkRequest,
    ) -> Result<T, Error> {
        let (tx, rx) = oneshot::channel();
        self.send_to_next_worker(make(tx)).await?;
        rx.await.map_err(|_| Error::ChannelError {
            context: "Worker dropped the call without replying".to_string(),
        })
    }

    /// Stops all workers in the pool.
    ///
    /// - Cancels the shared [`CancellationToken`] so no new work is accepted.
    /// - Sends a [`WorkRequest::Shutdown`] to each worker.
    /// - Waits (up to `shutdown_timeout` per worker) for acknowledgements.
    ///
    /// Calls already queued are not drained. Calling this more than once is a
    /// no-op after the first call.
    pub async fn shutdown(&self) -> Result<(), Error> {
        if self.shutdown_token.is_cancelled() {
            return Ok(());
        }

        tracing::info!("Refusing new requests");
        self.shutdown_token.cancel();

        tracing::debug!("Notifying all workers to shut down");
        let mut shutdown_handles = Vec::with_capacity(self.workers.len());

        for (i, worker) in self.workers.iter().enumerate() {
            let (tx, rx) = oneshot::channel();
            match timeout(
                self.shutdown_timeout,
                worker.send(WorkRequest::Shutdown { response: tx }),
            )
            .await
            {
                Ok(Ok(())) => shutdown_handles.push((i, rx)),
                Ok(Err(e)) => tracing::error!("Failed to send shutdown to worker {i}: {e}"),
                Err(_) => tracing::warn!("Worker {i} queue stayed full, skipping shutdown"),
            }
        }

        tracing::debug!(
            "Waiting for up to {:?} per worker for shutdown acknowledgements",
            self.shutdown_timeout
        );

        let shutdown_timeout = self.shutdown_timeout;
        let timeout_futures = shutdown_handles.into_iter().map(|(i, rx)| async move {
            match timeout(shutdown_timeout, rx).await {
                Ok(Ok(())) => tracing::trace!("Worker {i} shutdown acknowledged"),
                Ok(Err(e)) => tracing::error!("Worker {i} returned error: {e}"),
                Err(_) => tracing::warn!("Worker {i} shutdown timed out"),
            }
        });

        futures::future::join_all(timeout_futures).await;

        tracing::info!("Worker pool shutdown complete");

        Ok(())
    }
}
