//! Configuration for the job system.

use crate::core::{JobError, Result};

/// Configuration for [`JobSystem`].
///
/// [`JobSystem`]: crate::JobSystem
///
/// # Example
///
/// ```rust
/// use job_system::JobSystemConfig;
///
/// let config = JobSystemConfig::new()
///     .with_worker_threads(8)
///     .with_thread_name_prefix("asset-worker");
/// ```
#[derive(Clone, Debug)]
pub struct JobSystemConfig {
    /// Number of worker threads. `None` derives the count from hardware
    /// concurrency as `max(4, 2 × logical_cores)`.
    pub worker_threads: Option<usize>,

    /// Thread name prefix; worker `i` is named `"{prefix}-{i}"`.
    pub thread_name_prefix: String,
}

impl Default for JobSystemConfig {
    fn default() -> Self {
        Self {
            worker_threads: None,
            thread_name_prefix: "job-worker".to_string(),
        }
    }
}

impl JobSystemConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the worker count instead of deriving it from the hardware.
    ///
    /// A single-worker pool serializes execution in submission order, which
    /// is occasionally useful for debugging and deterministic tests.
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_worker_threads(mut self, count: usize) -> Self {
        self.worker_threads = Some(count);
        self
    }

    /// Set the thread name prefix.
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_thread_name_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.worker_threads == Some(0) {
            return Err(JobError::invalid_config(
                "worker_threads",
                "number of threads must be greater than 0",
            ));
        }
        Ok(())
    }

    /// The worker count `init()` will actually use.
    ///
    /// `num_cpus::get()` reports at least 1 even when the hardware count is
    /// unavailable, and the floor of 4 covers small machines.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_threads {
            Some(count) => count,
            None => std::cmp::max(4, num_cpus::get().saturating_mul(2)),
        }
    }
}
