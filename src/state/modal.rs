//! Modal dialog state for the UI.

use crate::error::{SubmissionError, ValidationError};

/// Modal overlay currently shown on top of the main layout.
///
/// While a modal is open it captures all key input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    /// No modal; keys go to the focused pane.
    #[default]
    None,
    /// Blocking notice dismissed with Enter or Esc.
    Alert {
        /// Headline shown in the border.
        title: String,
        /// Body text.
        message: String,
    },
    /// Key binding overview.
    Help,
}

impl Modal {
    /// What: Build the alert shown for a rejected form.
    #[must_use]
    pub fn validation(err: ValidationError) -> Self {
        Self::Alert {
            title: "Missing input".to_string(),
            message: err.to_string(),
        }
    }

    /// What: Build the alert shown for a failed analyze call.
    ///
    /// Details:
    /// - The title separates "could not reach service" from other failures.
    #[must_use]
    pub fn submission(err: &SubmissionError) -> Self {
        Self::Alert {
            title: err.headline().to_string(),
            message: err.to_string(),
        }
    }

    /// Whether any modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
