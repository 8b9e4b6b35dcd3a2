//! The dynamic input row widget.
//!
//! [`DynamicInput`] is the widget surface over a [`RowList`]: it applies the
//! mutation operations, emits change signals for the rendering layer, and
//! schedules focus application for the frame after each mutation commits.
//!
//! # Presentational Surface
//!
//! The rendering layer (an external collaborator) draws one text-input field
//! plus delete/move-up/move-down controls per row, and a single append
//! control regardless of row count. It reads [`rows`](DynamicInput::rows)
//! for content and order, re-renders on the change signals, and moves real
//! input focus when `focus_changed` fires after
//! [`commit_frame`](DynamicInput::commit_frame).
//!
//! # Signals
//!
//! - `row_appended`: Emitted with the new row's position
//! - `row_removed`: Emitted with the removed row's former position
//! - `rows_swapped`: Emitted with the two positions that exchanged rows
//! - `value_changed`: Emitted with a row's position and new text
//! - `focus().focus_changed`: Emitted when the focus target is applied
//!
//! # Example
//!
//! ```
//! use dyninput::DynamicInput;
//!
//! let mut di = DynamicInput::new();
//!
//! let position = di.append();
//! di.set_value(position, "cucumber");
//!
//! // The host re-renders, then commits the frame; only now is focus applied.
//! di.commit_frame();
//! assert_eq!(di.focus_position(), Some(position));
//! ```

use std::sync::Arc;

use dyninput_core::{DeferredTaskId, FrameQueue, Signal};

use crate::focus::FocusTracker;
use crate::rows::RowList;

/// A dynamic list-of-text-inputs widget.
///
/// Each instance owns its own [`RowList`], focus state, and frame queue;
/// multiple instances never interfere with one another.
///
/// Mutations are two-phase: the list change commits immediately and its
/// change signal fires, but the focus target is only applied when the host
/// calls [`commit_frame`](Self::commit_frame) after re-rendering. If several
/// mutations land before one commit, only the most recent focus target is
/// applied.
pub struct DynamicInput {
    /// The ordered rows.
    rows: RowList,

    /// Focus state, shared with deferred frame tasks.
    focus: Arc<FocusTracker>,

    /// Deferred side effects, drained by the host once per render pass.
    frame: FrameQueue,

    /// The not-yet-run focus task from the latest mutation, if any.
    pending_focus_task: Option<DeferredTaskId>,

    /// Signal emitted when a row is appended, with its position.
    pub row_appended: Signal<usize>,

    /// Signal emitted when a row is removed, with its former position.
    pub row_removed: Signal<usize>,

    /// Signal emitted when two adjacent rows swap, with both positions.
    pub rows_swapped: Signal<(usize, usize)>,

    /// Signal emitted when a row's text changes, with position and new text.
    pub value_changed: Signal<(usize, String)>,
}

impl DynamicInput {
    /// Creates a widget with no rows and no focus target.
    pub fn new() -> Self {
        Self {
            rows: RowList::new(),
            focus: Arc::new(FocusTracker::new()),
            frame: FrameQueue::new(),
            pending_focus_task: None,
            row_appended: Signal::new(),
            row_removed: Signal::new(),
            rows_swapped: Signal::new(),
            value_changed: Signal::new(),
        }
    }

    /// Appends a new empty row at the end of the list.
    ///
    /// Returns the new row's position. Focus moves to the appended row on
    /// the next frame commit, regardless of which row held focus before.
    pub fn append(&mut self) -> usize {
        let position = self.rows.append();
        tracing::debug!(target: "dyninput::widget", position, "append row");
        self.row_appended.emit(position);
        self.schedule_focus(Some(position));
        position
    }

    /// Replaces the text at `position`.
    ///
    /// Editing one row never mutates another, and never moves focus. Setting
    /// a row to the text it already holds emits nothing.
    pub fn set_value(&mut self, position: usize, value: impl Into<String>) {
        let value = value.into();
        if self.rows.value(position) == Some(value.as_str()) {
            return;
        }
        self.rows.set_value(position, value.clone());
        self.value_changed.emit((position, value));
    }

    /// Deletes the row at `position`; later rows shift down by one.
    ///
    /// On the next frame commit, focus moves to the row now occupying
    /// `position` if one exists, else to the new last row, else clears when
    /// the list became empty.
    pub fn delete(&mut self, position: usize) {
        let target = self.rows.remove(position);
        tracing::debug!(target: "dyninput::widget", position, ?target, "delete row");
        self.row_removed.emit(position);
        self.schedule_focus(target);
    }

    /// Moves the row at `position` up one place.
    ///
    /// No-op when the row is already at the top. Focus follows the moved row
    /// on the next frame commit in either case.
    pub fn move_up(&mut self, position: usize) {
        let new_position = self.rows.move_up(position);
        if new_position != position {
            self.rows_swapped.emit((position, new_position));
        }
        self.schedule_focus(Some(new_position));
    }

    /// Moves the row at `position` down one place.
    ///
    /// No-op when the row is already at the bottom. Focus follows the moved
    /// row on the next frame commit in either case.
    pub fn move_down(&mut self, position: usize) {
        let new_position = self.rows.move_down(position);
        if new_position != position {
            self.rows_swapped.emit((position, new_position));
        }
        self.schedule_focus(Some(new_position));
    }

    /// Drains the frame queue, applying any deferred focus target.
    ///
    /// The host calls this once per render pass, after the mutation has been
    /// committed to the screen. Returns the number of deferred tasks that
    /// ran.
    pub fn commit_frame(&mut self) -> usize {
        self.pending_focus_task = None;
        self.frame.run_pending()
    }

    /// Checks whether a focus application is still waiting for the next
    /// frame commit.
    pub fn pending_focus(&self) -> bool {
        self.pending_focus_task
            .is_some_and(|id| self.frame.is_pending(id))
    }

    /// Gets the ordered rows for rendering.
    pub fn rows(&self) -> &RowList {
        &self.rows
    }

    /// Gets the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Gets the text value at `position`, if the row exists.
    pub fn value(&self, position: usize) -> Option<&str> {
        self.rows.value(position)
    }

    /// Gets the position currently holding focus, if any.
    ///
    /// This reflects *applied* focus: a target scheduled by a mutation is
    /// not visible here until [`commit_frame`](Self::commit_frame).
    pub fn focus_position(&self) -> Option<usize> {
        self.focus.target()
    }

    /// Gets the focus tracker, e.g. to connect to `focus_changed`.
    pub fn focus(&self) -> &FocusTracker {
        &self.focus
    }

    /// Gets the value of the focused row, if a row holds focus.
    ///
    /// Mirrors what the rendering layer's active input element would contain.
    pub fn focused_value(&self) -> Option<&str> {
        self.focus.target().and_then(|position| self.rows.value(position))
    }

    /// Schedule `target` to be applied on the next frame commit.
    ///
    /// Supersedes any focus task from an earlier mutation in the same frame:
    /// the focus target is derived state, recomputed per operation, so only
    /// the latest one may be observed.
    fn schedule_focus(&mut self, target: Option<usize>) {
        if let Some(id) = self.pending_focus_task.take() {
            // Err means the task already ran in a previous commit.
            let _ = self.frame.cancel(id);
        }

        let focus = Arc::clone(&self.focus);
        let id = self.frame.defer(move || {
            focus.apply(target);
        });
        self.pending_focus_task = Some(id);
    }
}

impl Default for DynamicInput {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DynamicInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicInput")
            .field("rows", &self.rows)
            .field("focus", &self.focus)
            .field("pending_focus", &self.pending_focus())
            .finish()
    }
}
