//! Per-type completion tracking: pending counts and wait signals.
//!
//! Each registered job type owns one pending count and one condition
//! variable. The count is raised before a job becomes visible to workers and
//! lowered after its callable has finished executing, so a zero count means
//! "no job of this type is queued or running".

use crate::core::JobType;
use parking_lot::{Condvar, Mutex};
use std::marker::PhantomData;
use std::sync::Arc;

/// Pending count plus wait signal for a single job type.
pub(crate) struct TypeState {
    pending: Mutex<usize>,
    idle: Condvar,
}

impl TypeState {
    fn new() -> Self {
        Self {
            pending: Mutex::new(0),
            idle: Condvar::new(),
        }
    }

    /// Record one submitted job of this type.
    pub fn begin_one(&self) {
        *self.pending.lock() += 1;
    }

    /// Record one finished (or revoked) job of this type, waking all waiters
    /// if the count reaches zero.
    pub fn finish_one(&self) {
        let mut pending = self.pending.lock();
        debug_assert!(*pending > 0, "finish_one without a matching begin_one");
        *pending = pending.saturating_sub(1);
        if *pending == 0 {
            // Notify while the lock is held: the zero count is visible
            // before any waiter re-checks its predicate.
            self.idle.notify_all();
        }
    }

    /// Block the calling thread until the pending count is zero.
    ///
    /// Returns immediately when the count is already zero. The predicate is
    /// re-checked on every wakeup, so completions of other types never
    /// release a waiter early.
    pub fn wait_idle(&self) {
        let mut pending = self.pending.lock();
        while *pending > 0 {
            self.idle.wait(&mut pending);
        }
    }

    /// Current pending count.
    pub fn pending(&self) -> usize {
        *self.pending.lock()
    }
}

/// Slot table mapping each registered job type to its [`TypeState`].
///
/// Slots are indexed by a variant's position in `JobType::all_variants()`;
/// an empty slot is exactly the "unregistered type" condition. Registration
/// happens strictly before the worker pool starts, after which clones of the
/// table (sharing the same `Arc`ed states) are handed to worker threads and
/// the table is never mutated again.
pub(crate) struct PendingCounts<T: JobType> {
    slots: Vec<Option<Arc<TypeState>>>,
    _types: PhantomData<fn(T)>,
}

impl<T: JobType> PendingCounts<T> {
    pub fn new() -> Self {
        Self {
            slots: vec![None; T::all_variants().len()],
            _types: PhantomData,
        }
    }

    /// Allocate tracking state for `job_type`.
    ///
    /// Returns `false` without touching existing state when the type is
    /// already registered.
    pub fn register(&mut self, job_type: T) -> bool {
        match Self::slot_of(job_type) {
            Some(slot) if self.slots[slot].is_none() => {
                self.slots[slot] = Some(Arc::new(TypeState::new()));
                true
            }
            _ => false,
        }
    }

    /// Tracking state for `job_type`, or `None` if it was never registered.
    pub fn get(&self, job_type: T) -> Option<&Arc<TypeState>> {
        Self::slot_of(job_type).and_then(|slot| self.slots[slot].as_ref())
    }

    fn slot_of(job_type: T) -> Option<usize> {
        T::all_variants().iter().position(|v| *v == job_type)
    }
}

impl<T: JobType> Clone for PendingCounts<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            _types: PhantomData,
        }
    }
}
