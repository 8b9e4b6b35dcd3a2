//! Error types for dyninput.
//!
//! The only fallible operation in the core is cancelling a deferred frame
//! task; signal disconnection reports success as a `bool` on
//! [`Signal::disconnect`](crate::Signal::disconnect).

use std::fmt;

/// The main error type for dyninput core operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Frame queue-related error.
    Frame(FrameError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frame(err) => write!(f, "Frame queue error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Frame(err) => Some(err),
        }
    }
}

/// Frame queue-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The task ID is invalid or the task has already run.
    InvalidTaskId,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTaskId => write!(f, "Invalid or already-executed task ID"),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<FrameError> for CoreError {
    fn from(err: FrameError) -> Self {
        Self::Frame(err)
    }
}

/// A specialized Result type for dyninput core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
