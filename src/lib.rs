//! # Job System
//!
//! A fire-and-forget job system: a fixed pool of worker threads pulls typed
//! jobs from one shared FIFO queue, and callers rendezvous with the pool by
//! blocking until every job of a given type has finished executing.
//!
//! ## Features
//!
//! - **Typed jobs**: every job carries a [`JobType`] used purely for
//!   completion tracking, never for priority or ordering
//! - **Single FIFO queue**: all producers feed one unbounded queue; jobs of
//!   different types interleave in submission order
//! - **Per-type waits**: [`JobSystem::wait`] blocks until the pending count
//!   of one type reaches zero, without caring about other types
//! - **Fixed worker pool**: sized from hardware concurrency at [`init`] time
//!   and never resized
//! - **Thread safety**: built on `parking_lot` and `crossbeam-channel`
//!
//! [`init`]: JobSystem::init
//!
//! ## Quick Start
//!
//! ```rust
//! use job_system::prelude::*;
//!
//! # fn main() -> job_system::Result<()> {
//! let mut jobs = JobSystem::new();
//!
//! // Register every type up front, then start the pool.
//! jobs.register_job_type(EngineJobType::LoadAsset);
//! jobs.register_job_type(EngineJobType::GenerateCommandBuffer);
//! jobs.init()?;
//!
//! // Hand closures to the pool.
//! for i in 0..10 {
//!     jobs.execute(EngineJobType::LoadAsset, move || {
//!         println!("loading asset {}", i);
//!     })?;
//! }
//!
//! // Block until every LoadAsset job has finished.
//! jobs.wait(EngineJobType::LoadAsset)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Job Types
//!
//! Any small closed enum can act as a job type:
//!
//! ```rust
//! use job_system::prelude::*;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum RenderJob {
//!     CullScene,
//!     BuildDrawList,
//! }
//!
//! impl JobType for RenderJob {
//!     fn all_variants() -> &'static [Self] {
//!         &[Self::CullScene, Self::BuildDrawList]
//!     }
//! }
//!
//! # fn main() -> job_system::Result<()> {
//! let mut jobs = JobSystem::new();
//! jobs.register_job_type(RenderJob::CullScene);
//! jobs.register_job_type(RenderJob::BuildDrawList);
//! jobs.init()?;
//! jobs.execute(RenderJob::CullScene, || {})?;
//! jobs.wait(RenderJob::CullScene)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure Semantics
//!
//! The system guarantees structural bookkeeping only. A job callable has no
//! return value and no error channel; whatever recovery it needs, it does
//! itself. A panic inside a callable is **not** caught: it unwinds the worker
//! thread, the type's pending count is never decremented, and every
//! [`JobSystem::wait`] on that type blocks forever. The worker logs a fatal
//! notice on its way down, but nothing retries or resurrects the job.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod prelude;
pub mod system;

mod queue;

pub use crate::core::{EngineJobType, Job, JobError, JobFn, JobType, Result};
pub use system::{JobSystem, JobSystemConfig};
