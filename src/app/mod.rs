//! revscope application module.
//!
//! Hosts the TUI runtime (event loop, background workers, handlers) and the
//! terminal setup/restore helpers.

/// Runtime event loop and background workers.
pub mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers use `app::run(...)`.
pub use runtime::{RunOptions, run};
