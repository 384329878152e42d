//! Core non-UI logic split into modular submodules.

pub mod history;
pub mod normalize;
pub mod projection;
pub mod sentiment;
pub mod submission;

// Re-export public APIs so callers can use `crate::logic::...`
pub use history::{HistorySync, RefreshOutcome, RefreshReason, RefreshTicket};
pub use normalize::{AnalysisReport, KeyPointLine, KeyPoints, normalize_report};
pub use projection::{HistoryView, project, project_all};
pub use sentiment::classify;
pub use submission::{
    Completion, IssuedRequest, SubmissionMachine, SubmissionPhase, validate_form,
};
