//! Job type definitions for per-type completion tracking.
//!
//! A job type is a small closed enumeration used purely as a grouping key:
//! [`crate::JobSystem::wait`] blocks on one type's pending count and nothing
//! else. Types carry no priority and impose no ordering.

use std::fmt::Debug;

/// Trait for defining job type categories.
///
/// # Requirements
///
/// Implementations must be:
/// - `Copy`: types are freely copied into jobs and worker threads
/// - `Eq`: types are matched against their slot in `all_variants()`
/// - `Send + Sync + 'static`: types cross thread boundaries
/// - `Debug`: types can be formatted for logging
///
/// # Example
///
/// ```rust
/// use job_system::JobType;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum GameJobType {
///     Physics,
///     Audio,
///     Streaming,
/// }
///
/// impl JobType for GameJobType {
///     fn all_variants() -> &'static [Self] {
///         &[Self::Physics, Self::Audio, Self::Streaming]
///     }
/// }
/// ```
pub trait JobType: Copy + Eq + Send + Sync + Debug + 'static {
    /// Returns all possible variants of this job type.
    ///
    /// The position of a variant in this slice is its slot in the system's
    /// per-type tracking table, so the slice must be stable for the life of
    /// the process and must list every variant exactly once.
    fn all_variants() -> &'static [Self];

    /// Returns a human-readable name for this job type.
    ///
    /// Defaults to the `Debug` representation. Override for custom formatting.
    fn name(&self) -> String {
        format!("{:?}", self)
    }
}

/// Built-in job types for the engine workloads the system was written for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineJobType {
    /// Asset loading off the main thread (models, textures, scene chunks).
    LoadAsset,

    /// Recording of per-frame GPU command buffers.
    GenerateCommandBuffer,
}

impl JobType for EngineJobType {
    fn all_variants() -> &'static [Self] {
        &[Self::LoadAsset, Self::GenerateCommandBuffer]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_job_type_variants() {
        let variants = EngineJobType::all_variants();
        assert_eq!(variants.len(), 2);
        assert!(variants.contains(&EngineJobType::LoadAsset));
        assert!(variants.contains(&EngineJobType::GenerateCommandBuffer));
    }

    #[test]
    fn test_engine_job_type_name() {
        assert_eq!(EngineJobType::LoadAsset.name(), "LoadAsset");
        assert_eq!(
            EngineJobType::GenerateCommandBuffer.name(),
            "GenerateCommandBuffer"
        );
    }

    #[test]
    fn test_job_type_is_copy() {
        let t = EngineJobType::LoadAsset;
        let t2 = t;
        assert_eq!(t, t2);
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum CustomJobType {
        TypeA,
        TypeB,
    }

    impl JobType for CustomJobType {
        fn all_variants() -> &'static [Self] {
            &[Self::TypeA, Self::TypeB]
        }

        fn name(&self) -> String {
            match self {
                Self::TypeA => "A".to_string(),
                Self::TypeB => "B".to_string(),
            }
        }
    }

    #[test]
    fn test_custom_job_type() {
        assert_eq!(CustomJobType::all_variants().len(), 2);
        assert_eq!(CustomJobType::TypeA.name(), "A");
        assert_eq!(CustomJobType::TypeB.name(), "B");
    }
}
