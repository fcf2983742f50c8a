//! Worker thread implementation.
//!
//! Workers are spawned once at `init()` and detached: the system keeps no
//! join handle and never signals them. Each worker loops forever pulling
//! jobs from the shared queue; it exits only if the queue disconnects, which
//! happens when the owning [`JobSystem`] is dropped.
//!
//! [`JobSystem`]: crate::JobSystem

use crate::core::{Job, JobError, JobType, Result};
use crate::system::pending::PendingCounts;
use crossbeam_channel::Receiver;
use log::{debug, error};
use std::thread;

/// Spawn one detached worker thread.
pub(crate) fn spawn<T: JobType>(
    id: usize,
    thread_name_prefix: &str,
    receiver: Receiver<Job<T>>,
    counts: PendingCounts<T>,
) -> Result<()> {
    let handle = thread::Builder::new()
        .name(format!("{}-{}", thread_name_prefix, id))
        .spawn(move || run(id, receiver, counts))
        .map_err(|e| JobError::spawn(id, e))?;
    // Dropping the handle detaches the worker: it runs for the life of the
    // queue and is reclaimed at process exit.
    drop(handle);
    Ok(())
}

/// Main worker loop.
fn run<T: JobType>(id: usize, receiver: Receiver<Job<T>>, counts: PendingCounts<T>) {
    debug!("worker {} started", id);

    while let Ok(job) = receiver.recv() {
        let job_type = job.job_type();

        debug!("worker thread begin: {}", id);
        {
            let _notice = PanicNotice {
                worker: id,
                type_name: job_type.name(),
            };
            // Panics are not caught: the unwind kills this worker thread and
            // the pending count below is never decremented.
            job.run();
        }
        debug!("worker thread end: {}", id);

        // The slot exists for every job accepted by add_job.
        if let Some(state) = counts.get(job_type) {
            state.finish_one();
        }
    }

    debug!("worker {} exiting: queue disconnected", id);
}

/// Logs a fatal notice when a job callable unwinds the worker thread.
///
/// The panic itself still propagates; this only makes the resulting
/// permanently-raised pending count visible in the logs.
struct PanicNotice {
    worker: usize,
    type_name: String,
}

impl Drop for PanicNotice {
    fn drop(&mut self) {
        if thread::panicking() {
            error!(
                "worker {} died: job of type '{}' panicked; the type's pending \
                 count will never reach zero and wait() calls on it will block forever",
                self.worker, self.type_name
            );
        }
    }
}
