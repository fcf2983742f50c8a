//! The job system façade: registration, worker pool startup, submission,
//! and per-type completion waits.

use crate::core::{Job, JobError, JobType, Result};
use crate::queue::JobQueue;
use crate::system::config::JobSystemConfig;
use crate::system::pending::PendingCounts;
use crate::system::worker;
use log::{info, trace, warn};
use std::sync::atomic::{AtomicU64, Ordering};

/// A thread-pool based task queue with per-type completion tracking.
///
/// Lifecycle: construct, register every job type, call [`init`] once to spin
/// up the worker pool, then submit jobs and wait on types for the remainder
/// of the process. Registration calls after [`init`] are ignored.
///
/// [`init`]: JobSystem::init
///
/// # Teardown
///
/// The reference design runs for the whole process: workers are detached and
/// never joined. As an extension beyond that, dropping the `JobSystem`
/// disconnects the queue; workers finish every job already queued and then
/// exit on their own. Drop itself never blocks and never joins.
///
/// # Example
///
/// ```rust
/// use job_system::prelude::*;
///
/// # fn main() -> job_system::Result<()> {
/// let mut jobs = JobSystem::new();
/// jobs.register_job_type(EngineJobType::LoadAsset);
/// jobs.register_job_type(EngineJobType::GenerateCommandBuffer);
/// jobs.init()?;
///
/// jobs.execute(EngineJobType::LoadAsset, || {
///     // load something expensive
/// })?;
/// jobs.wait(EngineJobType::LoadAsset)?;
/// # Ok(())
/// # }
/// ```
pub struct JobSystem<T: JobType> {
    config: JobSystemConfig,
    counts: PendingCounts<T>,
    /// Present once `init()` has spawned the pool.
    queue: Option<JobQueue<T>>,
    worker_count: usize,
    total_jobs_submitted: AtomicU64,
}

impl<T: JobType> std::fmt::Debug for JobSystem<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobSystem")
            .field("config", &self.config)
            .field("initialized", &self.queue.is_some())
            .field("worker_count", &self.worker_count)
            .field(
                "total_jobs_submitted",
                &self.total_jobs_submitted.load(Ordering::Relaxed),
            )
            .finish()
    }
}

impl<T: JobType> Default for JobSystem<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: JobType> JobSystem<T> {
    /// Create an uninitialized job system with default configuration.
    pub fn new() -> Self {
        Self {
            config: JobSystemConfig::default(),
            counts: PendingCounts::new(),
            queue: None,
            worker_count: 0,
            total_jobs_submitted: AtomicU64::new(0),
        }
    }

    /// Create an uninitialized job system with custom configuration.
    pub fn with_config(config: JobSystemConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            counts: PendingCounts::new(),
            queue: None,
            worker_count: 0,
            total_jobs_submitted: AtomicU64::new(0),
        })
    }

    /// Register a job type, allocating its pending count and wait signal.
    ///
    /// Must be called before [`init`](JobSystem::init); afterwards the call
    /// is ignored with a warning, so callers cannot rely on late
    /// registration. Registering the same type twice is a no-op.
    pub fn register_job_type(&mut self, job_type: T) {
        if self.queue.is_some() {
            warn!(
                "register_job_type({:?}) called after init(), ignoring",
                job_type
            );
            return;
        }
        if !self.counts.register(job_type) {
            trace!("job type {:?} already registered", job_type);
        }
    }

    /// Spin up the worker pool and transition the system to running.
    ///
    /// The worker count comes from the configuration, or from the hardware
    /// as `max(4, 2 × logical_cores)` when no override is set. Workers are
    /// detached; no shutdown signal exists.
    ///
    /// # Errors
    ///
    /// - [`JobError::AlreadyInitialized`] on a second call
    /// - [`JobError::Spawn`] if thread creation fails; this is a fatal
    ///   startup error and the system stays uninitialized
    pub fn init(&mut self) -> Result<()> {
        if self.queue.is_some() {
            return Err(JobError::already_initialized(self.worker_count));
        }

        let worker_count = self.config.resolved_worker_count();
        let queue = JobQueue::unbounded();

        for id in 0..worker_count {
            // On failure the partially-spawned workers park on the dropped
            // queue and exit; the system itself stays uninitialized.
            worker::spawn(
                id,
                &self.config.thread_name_prefix,
                queue.receiver(),
                self.counts.clone(),
            )?;
        }

        info!(
            "job system initialized: {} workers ({} logical cores)",
            worker_count,
            num_cpus::get()
        );

        self.queue = Some(queue);
        self.worker_count = worker_count;
        Ok(())
    }

    /// Append a job to the tail of the shared queue.
    ///
    /// Wakes at least one blocked worker. The queue is unbounded: submission
    /// never blocks and never applies back-pressure.
    ///
    /// # Errors
    ///
    /// - [`JobError::NotInitialized`] before [`init`](JobSystem::init)
    /// - [`JobError::UnregisteredType`] if the job's type has no tracking
    ///   state
    /// - [`JobError::QueueDisconnected`] if every worker thread has exited
    pub fn add_job(&self, job: Job<T>) -> Result<()> {
        let queue = self.queue.as_ref().ok_or(JobError::NotInitialized)?;
        let state = self
            .counts
            .get(job.job_type())
            .ok_or_else(|| JobError::unregistered(job.job_type().name()))?;

        // Raise the count before the job becomes visible to workers: a
        // waiter must never observe a zero count while a submitted job is
        // still in flight.
        state.begin_one();
        if let Err(e) = queue.send(job) {
            // The job never reached a worker; revoke its count.
            state.finish_one();
            return Err(e);
        }

        self.total_jobs_submitted.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Submit a closure as a job of the given type.
    pub fn execute<F>(&self, job_type: T, f: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.add_job(Job::new(job_type, f))
    }

    /// Block the calling thread until every pending job of `job_type` has
    /// finished executing.
    ///
    /// Returns immediately when the count is already zero, including for
    /// registered types that never received a job. Any number of threads may
    /// wait on the same type; all are released together once the last job
    /// completes. There is no timeout and no cancellation.
    ///
    /// Calling this from inside a job of the same type deadlocks: the worker
    /// running the caller can never finish, so the count never reaches zero.
    ///
    /// # Errors
    ///
    /// [`JobError::UnregisteredType`] if the type was never registered.
    pub fn wait(&self, job_type: T) -> Result<()> {
        let state = self
            .counts
            .get(job_type)
            .ok_or_else(|| JobError::unregistered(job_type.name()))?;
        state.wait_idle();
        Ok(())
    }

    /// Number of jobs of `job_type` submitted but not yet finished.
    ///
    /// # Errors
    ///
    /// [`JobError::UnregisteredType`] if the type was never registered.
    pub fn pending(&self, job_type: T) -> Result<usize> {
        let state = self
            .counts
            .get(job_type)
            .ok_or_else(|| JobError::unregistered(job_type.name()))?;
        Ok(state.pending())
    }

    /// Whether `init()` has run.
    pub fn is_initialized(&self) -> bool {
        self.queue.is_some()
    }

    /// Number of worker threads, or 0 before `init()`.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Number of jobs currently queued, across all types (approximate).
    pub fn queued_jobs(&self) -> usize {
        self.queue.as_ref().map(|q| q.len()).unwrap_or(0)
    }

    /// Total number of jobs accepted since construction.
    pub fn total_jobs_submitted(&self) -> u64 {
        self.total_jobs_submitted.load(Ordering::Relaxed)
    }
}
