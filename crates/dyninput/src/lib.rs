//! A dynamic list-of-text-inputs widget.
//!
//! dyninput maintains an ordered sequence of text rows and exposes the
//! operations a dynamic input list needs: append a row, edit a row, delete a
//! row, and move a row up or down. After every mutation it computes which
//! row should receive input focus, and applies that target one render pass
//! later so the rendering layer has committed the change first.
//!
//! # Architecture
//!
//! - [`RowList`] - the pure controller: ordered rows, mutation rules, focus
//!   targets
//! - [`FocusTracker`] - derived focus state with change notification
//! - [`DynamicInput`] - the widget surface: change signals, frame-deferred
//!   focus application, and the readable rows/focus state the rendering
//!   layer consumes
//!
//! The reactive primitives (signals, properties, the frame queue) live in
//! [`dyninput_core`].
//!
//! # Example
//!
//! ```
//! use dyninput::DynamicInput;
//!
//! let mut di = DynamicInput::new();
//!
//! // Build a four-row list.
//! for fruit in ["apples", "pears", "watermelon", "cantaloupe"] {
//!     let position = di.append();
//!     di.set_value(position, fruit);
//! }
//!
//! // Move the bottom row up one place.
//! di.move_up(3);
//! assert_eq!(
//!     di.rows().values(),
//!     vec!["apples", "pears", "cantaloupe", "watermelon"],
//! );
//!
//! // Focus lands on the moved row once the host commits the frame.
//! di.commit_frame();
//! assert_eq!(di.focused_value(), Some("cantaloupe"));
//! ```

pub mod focus;
pub mod rows;
pub mod widget;

pub use focus::FocusTracker;
pub use rows::{Row, RowList};
pub use widget::DynamicInput;

// Re-export the reactive primitives widget users interact with directly.
pub use dyninput_core::{ConnectionGuard, ConnectionId, FrameQueue, Signal};
