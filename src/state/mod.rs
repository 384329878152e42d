//! Application state split into the central container, modal state, and
//! shared value types.

pub mod app_state;
pub mod modal;
pub mod types;

// Public re-exports to keep paths short (`crate::state::*`)
pub use app_state::AppState;
pub use modal::Modal;
pub use types::{AnalysisRequest, EntryId, Focus, HistoryEntry, SentimentTier};
