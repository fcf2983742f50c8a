//! Error types for the job system

/// Result type for job system operations
pub type Result<T> = std::result::Result<T, JobError>;

/// Errors that can occur in the job system
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum JobError {
    /// Jobs were submitted before `init()` spawned the worker pool
    #[error("job system is not initialized")]
    NotInitialized,

    /// `init()` was called on an already-running system
    #[error("job system is already initialized with {worker_count} workers")]
    AlreadyInitialized {
        /// Number of worker threads spawned by the first `init()`
        worker_count: usize,
    },

    /// A job or wait referenced a type that was never registered
    #[error("job type '{type_name}' was not registered before init()")]
    UnregisteredType {
        /// Name of the unregistered job type
        type_name: String,
    },

    /// Failed to spawn a worker thread during `init()`
    #[error("failed to spawn worker thread #{worker_id}")]
    Spawn {
        /// Index of the worker that failed to spawn
        worker_id: usize,
        /// Source IO error
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with parameter
    #[error("invalid configuration for '{parameter}': {message}")]
    InvalidConfig {
        /// Configuration parameter name
        parameter: String,
        /// Error message
        message: String,
    },

    /// The queue has no consumers left: every worker thread has exited
    #[error("job queue is disconnected: all worker threads have exited")]
    QueueDisconnected,
}

impl JobError {
    /// Create an already initialized error
    pub fn already_initialized(worker_count: usize) -> Self {
        JobError::AlreadyInitialized { worker_count }
    }

    /// Create an unregistered type error
    pub fn unregistered(type_name: impl Into<String>) -> Self {
        JobError::UnregisteredType {
            type_name: type_name.into(),
        }
    }

    /// Create a spawn error
    pub fn spawn(worker_id: usize, source: std::io::Error) -> Self {
        JobError::Spawn { worker_id, source }
    }

    /// Create an invalid config error
    pub fn invalid_config(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        JobError::InvalidConfig {
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}
