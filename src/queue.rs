//! The shared FIFO job queue.
//!
//! One unbounded queue is shared by every producer and every worker. A job
//! is delivered to exactly one worker, in submission order; jobs of
//! different types interleave freely. The queue is deliberately unbounded:
//! the system applies no back-pressure (see DESIGN.md).

use crate::core::{Job, JobError, JobType, Result};
use crossbeam_channel::{Receiver, Sender};

/// Unbounded FIFO queue built on a crossbeam channel.
///
/// Holds the producer side; workers each hold a [`Receiver`] clone. Blocking
/// `recv` on the worker side doubles as the "queue non-empty" wait: a send
/// wakes at least one blocked worker.
pub(crate) struct JobQueue<T: JobType> {
    sender: Sender<Job<T>>,
    receiver: Receiver<Job<T>>,
}

impl<T: JobType> JobQueue<T> {
    /// Creates a new unbounded queue.
    pub fn unbounded() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self { sender, receiver }
    }

    /// Appends a job to the tail of the queue.
    ///
    /// Fails only when no receiver is left, which means every worker thread
    /// has exited.
    pub fn send(&self, job: Job<T>) -> Result<()> {
        self.sender.send(job).map_err(|_| JobError::QueueDisconnected)
    }

    /// Returns a consumer handle for one worker thread.
    pub fn receiver(&self) -> Receiver<Job<T>> {
        self.receiver.clone()
    }

    /// Number of jobs currently queued (approximate under concurrency).
    pub fn len(&self) -> usize {
        self.receiver.len()
    }
}
