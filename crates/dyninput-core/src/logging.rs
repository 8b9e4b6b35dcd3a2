//! Logging facilities for dyninput.
//!
//! dyninput uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The [`targets`] module lists the target names each subsystem logs under,
//! for use with `tracing` filter directives, e.g.
//! `RUST_LOG=dyninput_core::frame=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "dyninput_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "dyninput_core::signal";
    /// Frame queue target.
    pub const FRAME: &str = "dyninput_core::frame";
    /// Row list controller target.
    pub const ROWS: &str = "dyninput::rows";
    /// Focus tracking target.
    pub const FOCUS: &str = "dyninput::focus";
    /// Widget surface target.
    pub const WIDGET: &str = "dyninput::widget";
}
