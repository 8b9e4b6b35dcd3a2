//! Core systems for the dyninput widget.
//!
//! This crate provides the reactive plumbing underneath the dynamic input
//! row widget:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Change-detecting value cells
//! - **Frame Queue**: Side effects deferred to the next render commit
//!
//! # Signal/Slot Example
//!
//! ```
//! use dyninput_core::Signal;
//!
//! // Create a signal that notifies when a row's value changes
//! let value_changed = Signal::<(usize, String)>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|(pos, text)| {
//!     println!("Row {} is now {:?}", pos, text);
//! });
//!
//! // Emit the signal
//! value_changed.emit((0, "apples".to_string()));
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Frame Queue Example
//!
//! ```
//! use dyninput_core::FrameQueue;
//!
//! let queue = FrameQueue::new();
//!
//! // Defer a side effect to after the next render commit
//! queue.defer(|| println!("element exists now, focus it"));
//!
//! // The host drains the queue once per render pass
//! assert_eq!(queue.run_pending(), 1);
//! ```

mod error;
pub mod frame;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{CoreError, FrameError, Result};
pub use frame::{DeferredTaskId, FrameQueue};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};

// The reactive types cross the host/widget boundary; keep them shareable.
static_assertions::assert_impl_all!(Signal<(usize, String)>: Send, Sync);
static_assertions::assert_impl_all!(Property<Option<usize>>: Send, Sync);
static_assertions::assert_impl_all!(FrameQueue: Send, Sync);
