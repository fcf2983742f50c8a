//! Job values and related types

use crate::core::job_type::JobType;
use std::fmt;

/// Boxed zero-argument callable executed exactly once on a worker thread.
///
/// A job has no result value and no error channel; the callable must handle
/// its own failures internally.
pub type JobFn = Box<dyn FnOnce() + Send + 'static>;

/// A unit of work tagged with a [`JobType`].
///
/// Jobs are ephemeral: created by a producer, consumed exactly once by
/// exactly one worker, then discarded.
pub struct Job<T: JobType> {
    job_type: T,
    content: JobFn,
}

impl<T: JobType> Job<T> {
    /// Create a new job from a closure.
    pub fn new<F>(job_type: T, content: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            job_type,
            content: Box::new(content),
        }
    }

    /// The type this job is tracked under.
    pub fn job_type(&self) -> T {
        self.job_type
    }

    /// Consume the job and execute its content on the calling thread.
    pub fn run(self) {
        (self.content)();
    }
}

impl<T: JobType> fmt::Debug for Job<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Job({})", self.job_type.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::job_type::EngineJobType;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_job_type_accessor() {
        let job = Job::new(EngineJobType::LoadAsset, || {});
        assert_eq!(job.job_type(), EngineJobType::LoadAsset);
    }

    #[test]
    fn test_job_run_executes_content() {
        let ran = Arc::new(AtomicBool::new(false));
        let ran_clone = Arc::clone(&ran);

        let job = Job::new(EngineJobType::GenerateCommandBuffer, move || {
            ran_clone.store(true, Ordering::SeqCst);
        });
        job.run();

        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_job_debug_format() {
        let job = Job::new(EngineJobType::LoadAsset, || {});
        assert_eq!(format!("{:?}", job), "Job(LoadAsset)");
    }
}
