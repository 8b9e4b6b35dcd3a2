//! Deferred work queue drained after each render commit.
//!
//! Focus changes (and any other DOM/paint-dependent side effects) must be
//! applied *after* the rendering layer has committed the mutation that
//! produced them: the element receiving focus has to exist first. The
//! [`FrameQueue`] makes that two-phase contract explicit - mutations enqueue
//! one-shot callbacks, and the host drains the queue once per render pass.
//!
//! # Example
//!
//! ```
//! use dyninput_core::FrameQueue;
//!
//! let queue = FrameQueue::new();
//!
//! // Phase one: mutate state, defer the side effect.
//! let _id = queue.defer(|| {
//!     println!("applied after render commit");
//! });
//!
//! // Phase two: the host drains the queue after re-rendering.
//! assert_eq!(queue.run_pending(), 1);
//! ```

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{FrameError, Result};

new_key_type! {
    /// A unique identifier for a deferred frame task.
    ///
    /// Returned by [`FrameQueue::defer`]; used to cancel a task that has not
    /// yet run, e.g. when a newer mutation supersedes it.
    pub struct DeferredTaskId;
}

/// A boxed one-shot task closure.
type BoxedFrameTask = Box<dyn FnOnce() + Send + 'static>;

/// Internal queue state: task storage plus FIFO execution order.
///
/// The slotmap owns the closures and hands out stable ids for cancellation;
/// the order vector preserves defer order for the drain.
struct FrameQueueState {
    tasks: SlotMap<DeferredTaskId, BoxedFrameTask>,
    order: Vec<DeferredTaskId>,
}

/// A queue of one-shot callbacks deferred to the next render commit.
///
/// Tasks run in the order they were deferred. A task deferred *while* the
/// queue is draining does not run in the current drain; it waits for the
/// next one. This mirrors the host render loop: side effects scheduled
/// during a frame apply after the following frame.
pub struct FrameQueue {
    state: Mutex<FrameQueueState>,
}

impl FrameQueue {
    /// Create an empty frame queue.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FrameQueueState {
                tasks: SlotMap::with_key(),
                order: Vec::new(),
            }),
        }
    }

    /// Defer a one-shot task to the next drain.
    ///
    /// Returns the task ID that can be used to cancel the task before it runs.
    pub fn defer<F>(&self, task: F) -> DeferredTaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.state.lock();
        let id = state.tasks.insert(Box::new(task));
        state.order.push(id);
        tracing::trace!(target: "dyninput_core::frame", ?id, "deferred frame task");
        id
    }

    /// Cancel a deferred task that has not yet run.
    ///
    /// Returns `Ok(())` if the task was found and removed, or
    /// [`FrameError::InvalidTaskId`] if the ID is unknown or the task has
    /// already executed.
    pub fn cancel(&self, id: DeferredTaskId) -> Result<()> {
        let mut state = self.state.lock();
        if state.tasks.remove(id).is_some() {
            // Stale order entries are skipped during the drain.
            tracing::trace!(target: "dyninput_core::frame", ?id, "cancelled frame task");
            Ok(())
        } else {
            Err(FrameError::InvalidTaskId.into())
        }
    }

    /// Check whether a deferred task is still waiting to run.
    pub fn is_pending(&self, id: DeferredTaskId) -> bool {
        self.state.lock().tasks.contains_key(id)
    }

    /// Get the number of tasks waiting for the next drain.
    pub fn pending_count(&self) -> usize {
        self.state.lock().tasks.len()
    }

    /// Run every task deferred before this call, in defer order.
    ///
    /// Returns the number of tasks executed. Tasks deferred from inside a
    /// running task are left queued for the next drain.
    #[tracing::instrument(skip(self), target = "dyninput_core::frame", level = "trace")]
    pub fn run_pending(&self) -> usize {
        // Take the current batch so tasks can defer new work without
        // deadlocking on the queue lock.
        let batch: Vec<BoxedFrameTask> = {
            let mut state = self.state.lock();
            let order = std::mem::take(&mut state.order);
            order
                .into_iter()
                .filter_map(|id| state.tasks.remove(id))
                .collect()
        };

        let count = batch.len();
        for task in batch {
            task();
        }

        tracing::trace!(target: "dyninput_core::frame", executed = count, "drained frame queue");
        count
    }
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::new()
    }
}
