//! Focus tracking for the row list.
//!
//! This module provides [`FocusTracker`], which records which row position
//! (if any) should hold input focus. The tracker is derived state: it never
//! drives a mutation, it only reflects the focus target the most recent
//! mutation computed.
//!
//! # Two-Phase Contract
//!
//! The tracker is deliberately passive. Mutations do not call
//! [`apply`](FocusTracker::apply) directly; the widget defers the call to the
//! next render commit through [`FrameQueue`](dyninput_core::FrameQueue), so
//! the input element being focused is guaranteed to exist by the time
//! `focus_changed` fires.

use std::fmt;

use dyninput_core::{Property, Signal};

/// Tracks the row position that should hold input focus.
///
/// # Focus Change Notification
///
/// When the applied target differs from the current one, the tracker:
/// 1. Updates the stored position
/// 2. Emits [`focus_changed`](Self::focus_changed) with the new target
///
/// Applying the target that is already current is a no-op and emits nothing.
pub struct FocusTracker {
    /// The position currently holding focus, if any.
    position: Property<Option<usize>>,

    /// Signal emitted when the focus target actually changes.
    pub focus_changed: Signal<Option<usize>>,
}

impl FocusTracker {
    /// Create a tracker with no focused position.
    pub fn new() -> Self {
        Self {
            position: Property::new(None),
            focus_changed: Signal::new(),
        }
    }

    /// Get the position currently holding focus.
    #[inline]
    pub fn target(&self) -> Option<usize> {
        self.position.get()
    }

    /// Check if a specific position has focus.
    #[inline]
    pub fn has_focus(&self, position: usize) -> bool {
        self.position.get() == Some(position)
    }

    /// Apply a focus target, notifying listeners if it changed.
    ///
    /// Returns `true` if the target changed, `false` if it was already
    /// current.
    pub fn apply(&self, target: Option<usize>) -> bool {
        if self.position.set(target) {
            tracing::trace!(target: "dyninput::focus", ?target, "focus target changed");
            self.focus_changed.emit(target);
            true
        } else {
            false
        }
    }

    /// Clear focus entirely.
    ///
    /// After this, no position holds focus. Listeners are notified if a
    /// position previously did.
    pub fn clear(&self) -> bool {
        self.apply(None)
    }
}

impl Default for FocusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FocusTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusTracker")
            .field("position", &self.position.get())
            .finish()
    }
}
