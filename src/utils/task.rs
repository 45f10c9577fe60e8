//! One-shot deferred tasks.
//!
//! [`run_async`] starts a dedicated OS thread carrying its own single-threaded
//! tokio runtime, runs one task on it and lets both go once the task is done.
//! There is no pool and no reuse: every call pays for a fresh thread. The
//! returned [`TaskHandle`] is the only way to observe the outcome.

use std::error::Error as StdError;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::error::{Result, TaskError};

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

enum Worker {
    Running(JoinHandle<()>),
    Failed(String),
}

/// Handle to the eventual result of a task started with [`run_async`].
pub struct TaskHandle<T> {
    id: u64,
    receiver: oneshot::Receiver<Result<T>>,
    worker: Worker,
}

/// Runs `task` on a new worker thread and returns immediately.
///
/// `task` may suspend (timers, async I/O); it is driven by a current-thread
/// runtime with time and I/O enabled. An `Err` from the task, a panic inside
/// it, or a failure to start the worker all surface from
/// [`TaskHandle::get`] as [`crate::error::Error::TaskError`].
pub fn run_async<F, Fut, T, E>(task: F) -> TaskHandle<T>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = std::result::Result<T, E>> + 'static,
    T: Send + 'static,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    let id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    let (sender, receiver) = oneshot::channel();

    let spawned = thread::Builder::new()
        .name(format!("utilkit-task-{}", id))
        .spawn(move || {
            let outcome = execute(task);
            debug!(task_id = id, ok = outcome.is_ok(), "task finished");
            if sender.send(outcome).is_err() {
                debug!(task_id = id, "task handle dropped before completion");
            }
        });

    let worker = match spawned {
        Ok(handle) => Worker::Running(handle),
        Err(e) => {
            warn!(task_id = id, error = %e, "failed to spawn task worker");
            Worker::Failed(e.to_string())
        }
    };

    TaskHandle { id, receiver, worker }
}

fn execute<F, Fut, T, E>(task: F) -> Result<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| TaskError::Spawn(e.to_string()))?;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| runtime.block_on(task())));
    match outcome {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(TaskError::Failed(e.into()).into()),
        Err(payload) => Err(TaskError::Panicked(panic_message(payload.as_ref())).into()),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl<T> TaskHandle<T> {
    /// Identifier used in log events and the worker thread name.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True once the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        match &self.worker {
            Worker::Running(handle) => handle.is_finished(),
            Worker::Failed(_) => true,
        }
    }

    /// Blocks the calling thread until the task completes. Waits indefinitely.
    ///
    /// # Panics
    ///
    /// Panics when called from inside an async runtime; use [`TaskHandle::join`]
    /// there.
    pub fn get(self) -> Result<T> {
        let TaskHandle { id, receiver, worker } = self;
        let handle = match worker {
            Worker::Running(handle) => handle,
            Worker::Failed(reason) => return Err(TaskError::Spawn(reason).into()),
        };

        let outcome = receiver.blocking_recv();
        if handle.join().is_err() {
            warn!(task_id = id, "task worker terminated abnormally");
        }
        outcome.map_err(|_| TaskError::WorkerLost)?
    }

    /// Awaits the task without blocking the current runtime.
    pub async fn join(self) -> Result<T> {
        let TaskHandle { receiver, worker, .. } = self;
        if let Worker::Failed(reason) = worker {
            return Err(TaskError::Spawn(reason).into());
        }
        receiver.await.map_err(|_| TaskError::WorkerLost)?
    }
}
