//! Convenient re-exports for common types and traits

pub use crate::core::{EngineJobType, Job, JobError, JobFn, JobType, Result};
pub use crate::system::{JobSystem, JobSystemConfig};
