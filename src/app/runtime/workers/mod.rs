/// Analyze request worker.
pub mod analyze;
/// Tick and terminal input workers.
pub mod auxiliary;
/// History fetch worker.
pub mod history;
