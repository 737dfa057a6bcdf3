//! Cross-cutting support shared by the workspace binaries.
//!
//! - **`logging`**: `tracing` subscriber setup with stderr or rolling-file output.

pub mod logging;

pub use logging::{LogTarget, init_logging, init_logging_in_dir};
