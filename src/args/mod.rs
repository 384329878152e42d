//! Command-line argument parsing and handling.

pub mod definition;
pub mod oneshot;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, Mode};
pub use oneshot::{run_analyze, run_history};
pub use utils::determine_log_level;
